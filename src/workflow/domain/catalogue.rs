//! Built-in task catalogue and task seed builder.
//!
//! The catalogue is a static table: which attribute switches on which task,
//! what the task is called, and whether it needs power. The seed builder
//! reads nothing but this table and the property's flags.

use super::{PropertyAttribute, PropertyRecord, Task, TaskKey};

/// Keys of the built-in tasks.
pub mod keys {
    /// Paperwork and purchase orders.
    pub const PAPERWORK_POS: &str = "paperwork_pos";
    /// BGAS / power status check.
    pub const BGAS_CHECK: &str = "bgas_check";
    /// Asbestos survey.
    pub const ASBESTOS_SURVEY: &str = "asbestos_survey";
    /// Rot works survey request.
    pub const ROT_SURVEY_REQUEST: &str = "rot_survey_request";
    /// Kitchen renewal drawing request.
    pub const KITCHEN_DRAWING_REQUEST: &str = "kitchen_drawing_request";
    /// Asbestos removal.
    pub const ASBESTOS_REMOVAL: &str = "asbestos_removal";
    /// Heating referral and works.
    pub const HEATING: &str = "heating";
    /// Kitchen renewal works.
    pub const KITCHEN_WORKS: &str = "kitchen_works";
    /// Glazier.
    pub const GLAZIER: &str = "glazier";
    /// Altro flooring.
    pub const ALTRO: &str = "altro";
    /// Bathroom renewal.
    pub const BATHROOM: &str = "bathroom";
    /// Paint lines.
    pub const PAINT_LINES: &str = "paint_lines";
    /// Isolator.
    pub const ISOLATOR: &str = "isolator";
    /// EPC / EICR final stage.
    pub const EPC_EICR: &str = "epc_eicr";
}

/// One row of the seed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    /// Task key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Whether the task needs power.
    pub requires_power: bool,
}

impl TaskTemplate {
    const fn new(key: &'static str, name: &'static str, requires_power: bool) -> Self {
        Self {
            key,
            name,
            requires_power,
        }
    }

    fn instantiate(self) -> Task {
        Task::new(TaskKey::known(self.key), self.name, self.requires_power)
    }
}

/// Tasks every property gets, first and in this order.
pub const BASE_TASKS: [TaskTemplate; 2] = [
    TaskTemplate::new(keys::PAPERWORK_POS, "Paperwork & PO's", false),
    TaskTemplate::new(keys::BGAS_CHECK, "Check if property is on BGAS", false),
];

/// Optional tasks in presentation order, with the attribute that switches
/// each one on.
pub const OPTIONAL_TASKS: [(PropertyAttribute, TaskTemplate); 11] = [
    (
        PropertyAttribute::AsbestosSurvey,
        TaskTemplate::new(keys::ASBESTOS_SURVEY, "Asbestos Survey", false),
    ),
    (
        PropertyAttribute::RotWorks,
        TaskTemplate::new(keys::ROT_SURVEY_REQUEST, "Rot Works Survey Request", false),
    ),
    (
        PropertyAttribute::KitchenRenewal,
        TaskTemplate::new(
            keys::KITCHEN_DRAWING_REQUEST,
            "Kitchen Renewal Drawing Request",
            false,
        ),
    ),
    (
        PropertyAttribute::AsbestosRemoval,
        TaskTemplate::new(keys::ASBESTOS_REMOVAL, "Asbestos Removal", true),
    ),
    (
        PropertyAttribute::HeatingReferral,
        TaskTemplate::new(keys::HEATING, "Heating Referral / Works", true),
    ),
    (
        PropertyAttribute::KitchenRenewal,
        TaskTemplate::new(keys::KITCHEN_WORKS, "Kitchen Renewal Works", true),
    ),
    (
        PropertyAttribute::Glazier,
        TaskTemplate::new(keys::GLAZIER, "Glazier", false),
    ),
    (
        PropertyAttribute::AltroFlooring,
        TaskTemplate::new(keys::ALTRO, "Altro Flooring", true),
    ),
    (
        PropertyAttribute::BathroomRenewal,
        TaskTemplate::new(keys::BATHROOM, "Bathroom Renewal", true),
    ),
    (
        PropertyAttribute::PaintLines,
        TaskTemplate::new(keys::PAINT_LINES, "Paint Lines", false),
    ),
    (
        PropertyAttribute::IsolatorRequired,
        TaskTemplate::new(keys::ISOLATOR, "Isolator Required", true),
    ),
];

/// Final-stage task, appended last when its attribute is set.
pub const FINAL_STAGE_TASK: (PropertyAttribute, TaskTemplate) = (
    PropertyAttribute::Epc,
    TaskTemplate::new(keys::EPC_EICR, "EPC / EICR Final Stage", true),
);

/// Order of the standard workflow.
pub(crate) const STANDARD_ORDER: &[&str] = &[
    keys::PAPERWORK_POS,
    keys::BGAS_CHECK,
    keys::ASBESTOS_SURVEY,
    keys::ROT_SURVEY_REQUEST,
    keys::KITCHEN_DRAWING_REQUEST,
    keys::ISOLATOR,
    keys::ASBESTOS_REMOVAL,
    keys::HEATING,
    keys::KITCHEN_WORKS,
    keys::GLAZIER,
    keys::BATHROOM,
    keys::ALTRO,
    keys::PAINT_LINES,
    keys::EPC_EICR,
];

/// Work that can all happen before power is sorted.
pub(crate) const PREPARATION_GROUP: &[&str] = &[
    keys::PAPERWORK_POS,
    keys::BGAS_CHECK,
    keys::ASBESTOS_SURVEY,
    keys::ROT_SURVEY_REQUEST,
    keys::KITCHEN_DRAWING_REQUEST,
    keys::ISOLATOR,
];

pub(crate) const WORKS_GROUP: &[&str] = &[
    keys::HEATING,
    keys::KITCHEN_WORKS,
    keys::GLAZIER,
    keys::BATHROOM,
];

pub(crate) const FINISHES_GROUP: &[&str] = &[keys::ALTRO, keys::PAINT_LINES];

/// Builds the applicable task list for a property.
///
/// Base tasks come first, then optional tasks whose attribute is set, then
/// the final-stage task. Every task starts out not started and unblocked.
#[must_use]
pub fn build_task_seed(property: &PropertyRecord) -> Vec<Task> {
    let attributes = property.attributes();
    let optional = OPTIONAL_TASKS
        .iter()
        .chain(std::iter::once(&FINAL_STAGE_TASK))
        .filter(|(attribute, _)| attributes.is_set(*attribute))
        .map(|(_, template)| *template);

    BASE_TASKS
        .into_iter()
        .chain(optional)
        .map(TaskTemplate::instantiate)
        .collect()
}
