//! Built-in field schemas for the supported metadata types.

use mx_core::{field_map, FieldDefinition, TypeDefinition};
use std::collections::BTreeMap;

pub(crate) type Builder = fn() -> TypeDefinition;

/// Registry of type name to schema builder.
pub(crate) fn builders() -> &'static [(&'static str, Builder)] {
    &[
        ("CustomLabels", custom_labels),
        ("CustomObjectTranslation", custom_object_translation),
        ("PermissionSet", permission_set),
        ("Profile", profile),
        ("Workflow", workflow),
    ]
}

fn custom_labels() -> TypeDefinition {
    TypeDefinition::new(
        "CustomLabels",
        field_map([FieldDefinition::array(
            "labels",
            field_map([
                FieldDefinition::scalar("categories"),
                FieldDefinition::scalar("fullName"),
                FieldDefinition::scalar("language"),
                FieldDefinition::boolean("protected"),
                FieldDefinition::scalar("shortDescription"),
                FieldDefinition::scalar("value"),
            ]),
        )
        .sorted_by(["fullName"])]),
    )
}

fn profile() -> TypeDefinition {
    TypeDefinition::new(
        "Profile",
        field_map([
            FieldDefinition::array(
                "applicationVisibilities",
                field_map([
                    FieldDefinition::scalar("application"),
                    FieldDefinition::boolean("default"),
                    FieldDefinition::boolean("visible"),
                ]),
            )
            .sorted_by(["application"]),
            FieldDefinition::array(
                "classAccesses",
                field_map([
                    FieldDefinition::scalar("apexClass"),
                    FieldDefinition::boolean("enabled"),
                ]),
            )
            .sorted_by(["apexClass"]),
            FieldDefinition::boolean("custom"),
            FieldDefinition::scalar("description"),
            FieldDefinition::array(
                "fieldPermissions",
                field_map([
                    FieldDefinition::boolean("editable"),
                    FieldDefinition::scalar("field"),
                    FieldDefinition::boolean("readable"),
                ]),
            )
            .sorted_by(["field"]),
            FieldDefinition::array(
                "layoutAssignments",
                field_map([
                    FieldDefinition::scalar("layout"),
                    FieldDefinition::scalar("recordType"),
                ]),
            )
            .sorted_by(["layout", "recordType"]),
            FieldDefinition::object(
                "loginHours",
                field_map([
                    FieldDefinition::scalar("fridayEnd"),
                    FieldDefinition::scalar("fridayStart"),
                    FieldDefinition::scalar("mondayEnd"),
                    FieldDefinition::scalar("mondayStart"),
                    FieldDefinition::scalar("thursdayEnd"),
                    FieldDefinition::scalar("thursdayStart"),
                    FieldDefinition::scalar("tuesdayEnd"),
                    FieldDefinition::scalar("tuesdayStart"),
                    FieldDefinition::scalar("wednesdayEnd"),
                    FieldDefinition::scalar("wednesdayStart"),
                ]),
            ),
            FieldDefinition::array(
                "objectPermissions",
                field_map([
                    FieldDefinition::boolean("allowCreate"),
                    FieldDefinition::boolean("allowDelete"),
                    FieldDefinition::boolean("allowEdit"),
                    FieldDefinition::boolean("allowRead"),
                    FieldDefinition::boolean("modifyAllRecords"),
                    FieldDefinition::scalar("object"),
                    FieldDefinition::boolean("viewAllRecords"),
                ]),
            )
            .sorted_by(["object"]),
            FieldDefinition::array(
                "recordTypeVisibilities",
                field_map([
                    FieldDefinition::boolean("default"),
                    FieldDefinition::scalar("recordType"),
                    FieldDefinition::boolean("visible"),
                ]),
            )
            .sorted_by(["recordType"]),
            FieldDefinition::scalar("userLicense"),
            FieldDefinition::array(
                "userPermissions",
                field_map([
                    FieldDefinition::boolean("enabled"),
                    FieldDefinition::scalar("name"),
                ]),
            )
            .sorted_by(["name"]),
        ]),
    )
}

fn permission_set() -> TypeDefinition {
    TypeDefinition::new(
        "PermissionSet",
        field_map([
            FieldDefinition::array(
                "classAccesses",
                field_map([
                    FieldDefinition::scalar("apexClass"),
                    FieldDefinition::boolean("enabled"),
                ]),
            )
            .sorted_by(["apexClass"]),
            FieldDefinition::scalar("description"),
            FieldDefinition::array(
                "fieldPermissions",
                field_map([
                    FieldDefinition::boolean("editable"),
                    FieldDefinition::scalar("field"),
                    FieldDefinition::boolean("readable"),
                ]),
            )
            .sorted_by(["field"]),
            FieldDefinition::boolean("hasActivationRequired"),
            FieldDefinition::scalar("label"),
            FieldDefinition::scalar("license"),
            FieldDefinition::array(
                "objectPermissions",
                field_map([
                    FieldDefinition::boolean("allowCreate"),
                    FieldDefinition::boolean("allowDelete"),
                    FieldDefinition::boolean("allowEdit"),
                    FieldDefinition::boolean("allowRead"),
                    FieldDefinition::boolean("modifyAllRecords"),
                    FieldDefinition::scalar("object"),
                    FieldDefinition::boolean("viewAllRecords"),
                ]),
            )
            .sorted_by(["object"]),
            FieldDefinition::array(
                "recordTypeVisibilities",
                field_map([
                    FieldDefinition::scalar("recordType"),
                    FieldDefinition::boolean("visible"),
                ]),
            )
            .sorted_by(["recordType"]),
            FieldDefinition::array(
                "userPermissions",
                field_map([
                    FieldDefinition::boolean("enabled"),
                    FieldDefinition::scalar("name"),
                ]),
            )
            .sorted_by(["name"]),
        ]),
    )
}

fn workflow() -> TypeDefinition {
    TypeDefinition::new(
        "Workflow",
        field_map([
            FieldDefinition::array(
                "alerts",
                field_map([
                    FieldDefinition::scalar("description"),
                    FieldDefinition::scalar("fullName"),
                    FieldDefinition::boolean("protected"),
                    FieldDefinition::array(
                        "recipients",
                        field_map([
                            FieldDefinition::scalar("recipient"),
                            FieldDefinition::scalar("type"),
                        ]),
                    ),
                    FieldDefinition::scalar("senderType"),
                    FieldDefinition::scalar("template"),
                ]),
            )
            .sorted_by(["fullName"]),
            FieldDefinition::array(
                "fieldUpdates",
                field_map([
                    FieldDefinition::scalar("field"),
                    FieldDefinition::scalar("fullName"),
                    FieldDefinition::scalar("literalValue"),
                    FieldDefinition::scalar("name"),
                    FieldDefinition::boolean("notifyAssignee"),
                    FieldDefinition::scalar("operation"),
                ]),
            )
            .sorted_by(["fullName"]),
            FieldDefinition::array(
                "rules",
                field_map([
                    FieldDefinition::array(
                        "actions",
                        field_map([
                            FieldDefinition::scalar("name"),
                            FieldDefinition::scalar("type"),
                        ]),
                    ),
                    FieldDefinition::boolean("active"),
                    FieldDefinition::array(
                        "criteriaItems",
                        field_map([
                            FieldDefinition::scalar("field"),
                            FieldDefinition::scalar("operation"),
                            FieldDefinition::scalar("value"),
                        ]),
                    ),
                    FieldDefinition::scalar("description"),
                    FieldDefinition::scalar("formula"),
                    FieldDefinition::scalar("fullName"),
                    FieldDefinition::scalar("triggerType"),
                ]),
            )
            .sorted_by(["fullName"]),
        ]),
    )
}

fn custom_object_translation() -> TypeDefinition {
    // `picklistValues` is shared between field and record-type
    // translations via a definition reference.
    let shared = BTreeMap::from([(
        "picklistValueTranslation".to_string(),
        FieldDefinition::array(
            "picklistValues",
            field_map([
                FieldDefinition::scalar("masterLabel"),
                FieldDefinition::scalar("translation"),
            ]),
        )
        .sorted_by(["masterLabel"]),
    )]);
    TypeDefinition::with_shared(
        "CustomObjectTranslation",
        field_map([
            FieldDefinition::array(
                "fields",
                field_map([
                    FieldDefinition::scalar("help"),
                    FieldDefinition::scalar("label"),
                    FieldDefinition::scalar("name"),
                    FieldDefinition::reference("picklistValues", "picklistValueTranslation"),
                ]),
            )
            .sorted_by(["name"]),
            FieldDefinition::scalar("language"),
            FieldDefinition::array(
                "recordTypes",
                field_map([
                    FieldDefinition::scalar("description"),
                    FieldDefinition::scalar("label"),
                    FieldDefinition::scalar("name"),
                    FieldDefinition::reference("picklistValues", "picklistValueTranslation"),
                ]),
            )
            .sorted_by(["name"]),
        ]),
        shared,
    )
}
