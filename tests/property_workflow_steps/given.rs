//! Given steps for property workflow BDD scenarios.

use super::world::PropertyWorld;
use refit::workflow::domain::{PropertyAttribute, PropertyAttributes};
use rstest_bdd_macros::given;

#[given("a property with no optional attributes")]
fn no_optional_attributes(world: &mut PropertyWorld) {
    world.pending_request = world
        .pending_request
        .clone()
        .with_attributes(PropertyAttributes::default());
}

#[given(r#"a property with attributes "{attributes}""#)]
fn property_with_attributes(
    world: &mut PropertyWorld,
    attributes: String,
) -> Result<(), eyre::Report> {
    let mut request = world.pending_request.clone();
    for name in attributes.split(',') {
        let attribute = PropertyAttribute::try_from(name)
            .map_err(|err| eyre::eyre!("invalid attribute in scenario: {err}"))?;
        request = request.with_attribute(attribute);
    }
    world.pending_request = request;
    Ok(())
}

#[given(r#"the power status is "{status}""#)]
fn power_status_is(world: &mut PropertyWorld, status: String) {
    world.pending_request = world.pending_request.clone().with_power_status(status);
}
