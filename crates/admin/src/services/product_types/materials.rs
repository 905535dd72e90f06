//! Material vocabulary shared by the outer fabric, lining, and filling types.

use ocm_catalog_core::{AttributeType, EnumValue, LocalizedEnumValue, LocalizedString};

/// Material keys accepted by the composition types.
pub const MATERIAL_KEYS: &[&str] = &[
    "ACETAT",
    "ALFA",
    "ALGINAT",
    "ALPAKA",
    "ANDERE-FASERN",
    "ANGORA",
    "ARAMID",
    "BAUMWOLLE",
    "BAUMWOLLE-BIO",
    "BAUMWOLLE-PIMABAUMWOLLE",
    "BAUMWOLLE-RECYCELT",
    "BIBER",
    "CUPRO",
    "DAUNEN",
    "ECHTPELZ",
    "EDELSTAHL",
    "ELASTHAN",
    "ELASTODIEN",
    "ELASTOLEFIN",
    "ELASTOMULTIESTER",
    "FEDERN",
    "FISCHOTTER",
    "FLACHS",
    "FLUORFASER",
    "GINSTER",
    "GLASFASER",
    "GUANAKO",
    "HANF",
    "HENEQUEN",
    "JUTE",
    "KAMEL",
    "KAPOK",
    "KASCHGORA",
    "KASCHMIR",
    "KOKOS",
    "KUNSTFASER",
    "KUNSTOFF-WATTIERUNG",
    "LAMA",
    "LAMMFELL",
    "LEDER",
    "LEDERIMITAT",
    "LEINEN",
    "LYOCELL",
    "MAGUEY",
    "MANILA",
    "MELAMIN",
    "METALLFASER",
    "MODACRYL",
    "MODAL",
    "MOHAIR",
    "NATURFASER-WATTIERUNG",
    "NICKEL",
    "NYLON",
    "NYLON-RECYCELT",
    "OHNE-FUELLUNG",
    "PELZ-BIBER",
    "PELZ-DACHS",
    "PELZ-FUCHS",
    "PELZ-HASE",
    "PELZ-ILTIS",
    "PELZ-MARDER",
    "PELZ-NERZ",
    "PELZ-WASCHBAER",
    "PELZ-WIESEL",
    "POLYACRYL",
    "POLYAMID",
    "POLYAMID-RECYCELT",
    "POLYCARBONAT",
    "POLYCHLORID",
    "POLYCHLOROPREN",
    "POLYESTER",
    "POLYESTER-RECYCELT",
    "POLYETHYLEN",
    "POLYHARNSTOFF",
    "POLYIMID",
    "POLYLACTID",
    "POLYPROPYLEN",
    "POLYTETRAFLUORETHYLEN",
    "POLYURETHAN",
    "POLYVINYLCHLORID",
    "RAMIE",
    "REGENERIERTE-PROTEINFASER",
    "SCHURWOLLE",
    "SEIDE",
    "SISAL",
    "SONSTIGES",
    "TEXTIL",
    "TRIACETAT",
    "TRIVINYL",
    "UNGEFUETTERT",
    "VIKUNJA",
    "VINYLAL",
    "VISKOSE",
    "WOLLE",
    "WOLLE-BIO",
    "WOLLE-MERINO",
    "WOLLE-RECYCELT",
    "YAK",
    "POLYACRYLAT",
    "POLYACTID",
    "PAPIERFASERN",
    "SEACELL-LYOCELL",
    "COREVA",
    "WOOLTEN",
    "ENTENDAUNEN-RECYCELT",
    "LEDER-RECYCELT",
    "ENTENDAUNEN-ZERTIFIZIERT",
    "LEDER-ZERTIFIZIERT",
    "SORONA",
];

/// `KASCHGORA` -> `Kaschgora`, `BAUMWOLLE-BIO` -> `Baumwolle Bio`.
fn material_label(key: &str) -> String {
    key.split('-')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Localized enum over [`MATERIAL_KEYS`], labelled in German.
#[must_use]
pub fn material_enum() -> AttributeType {
    AttributeType::Lenum {
        values: MATERIAL_KEYS
            .iter()
            .map(|key| LocalizedEnumValue {
                key: (*key).to_string(),
                label: LocalizedString::new().with("de", material_label(key)),
            })
            .collect(),
    }
}

/// Measurement unit for a composition fraction.
#[must_use]
pub fn unit_enum() -> AttributeType {
    AttributeType::Enum {
        values: vec![
            EnumValue::new("percent", "%"),
            EnumValue::new("gram", "g"),
            EnumValue::new("kilogram", "kg"),
            EnumValue::new("liter", "l"),
            EnumValue::new("milliliter", "ml"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_material_label() {
        assert_eq!(material_label("KASCHGORA"), "Kaschgora");
        assert_eq!(material_label("BAUMWOLLE-BIO"), "Baumwolle Bio");
        assert_eq!(material_label("POLYESTER-RECYCELT"), "Polyester Recycelt");
    }

    #[test]
    fn test_material_keys_are_unique() {
        let unique: HashSet<_> = MATERIAL_KEYS.iter().collect();
        assert_eq!(unique.len(), MATERIAL_KEYS.len());
    }

    #[test]
    fn test_material_enum_covers_product_attributes() {
        let AttributeType::Lenum { values } = material_enum() else {
            panic!("material enum must be localized");
        };
        for key in ["KAMEL", "KASCHGORA", "HENEQUEN", "BIBER"] {
            assert!(values.iter().any(|v| v.key == key), "missing {key}");
        }
    }
}
