//! Product type drafts for the apparel catalog.
//!
//! Composition attributes (outer fabric, lining, filling) are sets of nested
//! attribute groups, so the shirt type can only be built once the three
//! material types and the benefits type exist and their IDs are known.

use ocm_catalog_core::{
    AttributeConstraint, AttributeDefinitionDraft, AttributeType, EnumValue, LocalizedString,
    ProductTypeDraft, ProductTypeId,
};

use super::materials::{material_enum, unit_enum};

pub const OUTER_FABRIC_TYPE_KEY: &str = "outerFabricType";
pub const LINING_MATERIAL_TYPE_KEY: &str = "liningMaterialType";
pub const FILLING_MATERIAL_TYPE_KEY: &str = "fillingMaterialType";
pub const BENEFITS_TYPE_KEY: &str = "benefits-product-type";
pub const SHIRT_TYPE_KEY: &str = "shirt-product-type";

/// One of the three nested material composition types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    OuterFabric,
    Lining,
    Filling,
}

impl MaterialKind {
    pub const ALL: [Self; 3] = [Self::OuterFabric, Self::Lining, Self::Filling];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OuterFabric => OUTER_FABRIC_TYPE_KEY,
            Self::Lining => LINING_MATERIAL_TYPE_KEY,
            Self::Filling => FILLING_MATERIAL_TYPE_KEY,
        }
    }

    const fn type_name(self) -> &'static str {
        match self {
            Self::OuterFabric => "OuterFabricType",
            Self::Lining => "LiningMaterialType",
            Self::Filling => "FillingMaterialType",
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::OuterFabric => "Type for outer fabric material attributes",
            Self::Lining => "Type for lining material attributes",
            Self::Filling => "Type for filling material attributes",
        }
    }

    fn material_label(self) -> LocalizedString {
        match self {
            Self::OuterFabric => LocalizedString::from([("en", "Outer Fabric"), ("de", "Obermaterial")]),
            Self::Lining => LocalizedString::from([("en", "Lining Material"), ("de", "Futtermaterial")]),
            Self::Filling => LocalizedString::from([("en", "Filling Material"), ("de", "Füllmaterial")]),
        }
    }
}

/// A material composition type: `material`, `fraction`, `unit`.
#[must_use]
pub fn material_type(kind: MaterialKind) -> ProductTypeDraft {
    ProductTypeDraft {
        key: Some(kind.key().to_string()),
        name: kind.type_name().to_string(),
        description: kind.description().to_string(),
        attributes: vec![
            AttributeDefinitionDraft::new("material", kind.material_label(), material_enum())
                .searchable(),
            AttributeDefinitionDraft::new("fraction", "Fraction", AttributeType::Number).required(),
            AttributeDefinitionDraft::new("unit", "Unit", unit_enum())
                .required()
                .searchable(),
        ],
    }
}

/// Product benefit badges (`code`, `name`, `imageUrl`).
#[must_use]
pub fn benefits_type() -> ProductTypeDraft {
    ProductTypeDraft {
        key: Some(BENEFITS_TYPE_KEY.to_string()),
        name: "Benefits".to_string(),
        description: "Product type for benefits".to_string(),
        attributes: vec![
            AttributeDefinitionDraft::new(
                "code",
                [("en", "Code"), ("de", "Code")],
                AttributeType::Text,
            )
            .required()
            .constraint(AttributeConstraint::Unique),
            AttributeDefinitionDraft::new(
                "name",
                [("en", "Name"), ("de", "Name")],
                AttributeType::Ltext,
            )
            .required(),
            AttributeDefinitionDraft::new(
                "imageUrl",
                [("en", "Image URL"), ("de", "Bild-URL")],
                AttributeType::Text,
            )
            .required(),
        ],
    }
}

/// IDs of the nested types referenced by the shirt type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedTypeIds {
    pub benefits: ProductTypeId,
    pub outer_fabric: ProductTypeId,
    pub lining: ProductTypeId,
    pub filling: ProductTypeId,
}

/// Composition slot: a set of nested material groups, same for all variants.
fn composition(
    name: String,
    label: [(&str, &str); 2],
    nested: &ProductTypeId,
    constraint: AttributeConstraint,
) -> AttributeDefinitionDraft {
    AttributeDefinitionDraft::new(name, label, AttributeType::set_of_nested(nested))
        .searchable()
        .constraint(constraint)
}

/// The shirt product type.
#[must_use]
pub fn shirt_type(ids: &NestedTypeIds) -> ProductTypeDraft {
    let mut attributes = vec![
        AttributeDefinitionDraft::new(
            "brand-name",
            [("en", "Brand Name"), ("de", "Markenname")],
            AttributeType::Text,
        )
        .required()
        .searchable()
        .constraint(AttributeConstraint::SameForAll),
        AttributeDefinitionDraft::new(
            "product-benefit",
            [("en", "Product Benefit"), ("de", "Produktnutzen")],
            AttributeType::set_of_nested(&ids.benefits),
        )
        .searchable()
        .constraint(AttributeConstraint::SameForAll),
        AttributeDefinitionDraft::new(
            "display-color",
            [("en", "Color"), ("de", "Farbe")],
            AttributeType::Ltext,
        )
        .required(),
        AttributeDefinitionDraft::new(
            "color",
            [("en", "Color"), ("de", "Farbe")],
            AttributeType::Enum {
                values: vec![
                    EnumValue::new("red", "Red"),
                    EnumValue::new("blue", "Blue"),
                    EnumValue::new("green", "Green"),
                ],
            },
        )
        .required()
        .searchable()
        .constraint(AttributeConstraint::CombinationUnique),
        AttributeDefinitionDraft::new(
            "size",
            [("en", "Size"), ("de", "Größe")],
            AttributeType::Text,
        )
        .required()
        .searchable()
        .constraint(AttributeConstraint::CombinationUnique),
    ];

    let upper = [("en", "Upper Material"), ("de", "Obermaterial")];
    for slot in 1..=4 {
        // The fourth outer fabric slot may differ between variants.
        let constraint = if slot == 4 {
            AttributeConstraint::None
        } else {
            AttributeConstraint::SameForAll
        };
        attributes.push(composition(
            format!("outer-fabric{slot}"),
            upper,
            &ids.outer_fabric,
            constraint,
        ));
    }
    for slot in 1..=3 {
        attributes.push(composition(
            format!("lining{slot}"),
            [("en", "Lining"), ("de", "Futter")],
            &ids.lining,
            AttributeConstraint::SameForAll,
        ));
    }
    for slot in 1..=2 {
        attributes.push(composition(
            format!("filling{slot}"),
            [("en", "Filling"), ("de", "Füllung")],
            &ids.filling,
            AttributeConstraint::SameForAll,
        ));
    }

    ProductTypeDraft {
        key: Some(SHIRT_TYPE_KEY.to_string()),
        name: "Shirt".to_string(),
        description: "Product type for shirt items".to_string(),
        attributes,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids() -> NestedTypeIds {
        NestedTypeIds {
            benefits: ProductTypeId::new("pt-benefits"),
            outer_fabric: ProductTypeId::new("pt-outer"),
            lining: ProductTypeId::new("pt-lining"),
            filling: ProductTypeId::new("pt-filling"),
        }
    }

    #[test]
    fn test_material_type_shape() {
        let draft = material_type(MaterialKind::Lining);
        assert_eq!(draft.key.as_deref(), Some("liningMaterialType"));
        assert_eq!(draft.name, "LiningMaterialType");

        let names: Vec<_> = draft.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["material", "fraction", "unit"]);

        let material = &draft.attributes[0];
        assert!(!material.is_required);
        assert!(material.is_searchable);
        assert_eq!(material.label.get("de"), Some("Futtermaterial"));

        let fraction = &draft.attributes[1];
        assert!(fraction.is_required);
        assert!(!fraction.is_searchable);
        assert_eq!(fraction.attribute_type, AttributeType::Number);
    }

    #[test]
    fn test_shirt_type_attributes() {
        let draft = shirt_type(&ids());
        let names: Vec<_> = draft.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "brand-name",
                "product-benefit",
                "display-color",
                "color",
                "size",
                "outer-fabric1",
                "outer-fabric2",
                "outer-fabric3",
                "outer-fabric4",
                "lining1",
                "lining2",
                "lining3",
                "filling1",
                "filling2",
            ]
        );

        let by_name = |name: &str| draft.attributes.iter().find(|a| a.name == name).unwrap();
        assert_eq!(
            by_name("outer-fabric4").attribute_constraint,
            AttributeConstraint::None
        );
        assert_eq!(
            by_name("outer-fabric1").attribute_constraint,
            AttributeConstraint::SameForAll
        );
        assert_eq!(
            by_name("size").attribute_constraint,
            AttributeConstraint::CombinationUnique
        );
        assert!(!by_name("product-benefit").is_required);
    }

    #[test]
    fn test_shirt_type_references_nested_ids() {
        let json = serde_json::to_value(shirt_type(&ids())).unwrap();
        let attrs = json["attributes"].as_array().unwrap();
        let reference = |name: &str| {
            attrs
                .iter()
                .find(|a| a["name"] == name)
                .map(|a| a["type"]["elementType"]["typeReference"]["id"].clone())
                .unwrap()
        };
        assert_eq!(reference("product-benefit"), "pt-benefits");
        assert_eq!(reference("outer-fabric2"), "pt-outer");
        assert_eq!(reference("lining3"), "pt-lining");
        assert_eq!(reference("filling1"), "pt-filling");
    }

    #[test]
    fn test_benefits_code_is_unique() {
        let draft = benefits_type();
        assert_eq!(draft.attributes[0].name, "code");
        assert_eq!(draft.attributes[0].attribute_constraint, AttributeConstraint::Unique);
    }
}
