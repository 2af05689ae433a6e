use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Tree,
    Factory,
    River,
    Mountain,
    Farmer,
    Scientist,
    Educator,
    Builder,
    Healer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Nature,
    Industry,
    Human,
}

/// Palette entry shown next to each placeable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub kind: ElementKind,
    pub label: &'static str,
    pub description: &'static str,
    pub category: ElementCategory,
}

impl ElementKind {
    /// Palette order.
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Tree,
        ElementKind::River,
        ElementKind::Mountain,
        ElementKind::Factory,
        ElementKind::Farmer,
        ElementKind::Scientist,
        ElementKind::Educator,
        ElementKind::Builder,
        ElementKind::Healer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Tree => "tree",
            ElementKind::Factory => "factory",
            ElementKind::River => "river",
            ElementKind::Mountain => "mountain",
            ElementKind::Farmer => "farmer",
            ElementKind::Scientist => "scientist",
            ElementKind::Educator => "educator",
            ElementKind::Builder => "builder",
            ElementKind::Healer => "healer",
        }
    }

    pub fn info(self) -> ElementInfo {
        let (label, description, category) = match self {
            ElementKind::Tree => ("Tree", "+Biodiversity, -Pollution", ElementCategory::Nature),
            ElementKind::River => ("River", "+Biodiversity, +Health", ElementCategory::Nature),
            ElementKind::Mountain => ("Mountain", "+Materials", ElementCategory::Nature),
            ElementKind::Factory => ("Factory", "+Energy, +Pollution", ElementCategory::Industry),
            ElementKind::Farmer => ("Farmer", "+Food", ElementCategory::Human),
            ElementKind::Scientist => (
                "Scientist",
                "+Knowledge, -Pollution",
                ElementCategory::Human,
            ),
            ElementKind::Educator => ("Educator", "+Knowledge", ElementCategory::Human),
            ElementKind::Builder => ("Builder", "Builds structures", ElementCategory::Human),
            ElementKind::Healer => ("Healer", "+Health", ElementCategory::Human),
        };
        ElementInfo {
            kind: self,
            label,
            description,
            category,
        }
    }

    pub fn category(self) -> ElementCategory {
        self.info().category
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element kind '{0}'")]
pub struct UnknownElementKind(pub String);

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| UnknownElementKind(s.to_string()))
    }
}

/// The palette in display order.
pub fn palette() -> Vec<ElementInfo> {
    ElementKind::ALL.iter().map(|kind| kind.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_their_names() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.as_str().parse::<ElementKind>(), Ok(kind));
        }
        assert_eq!(" Healer ".parse::<ElementKind>(), Ok(ElementKind::Healer));
        assert!("volcano".parse::<ElementKind>().is_err());
    }

    #[test]
    fn palette_groups_by_category() {
        let palette = palette();
        assert_eq!(palette.len(), 9);
        assert_eq!(palette[0].kind, ElementKind::Tree);
        let nature: Vec<_> = palette
            .iter()
            .filter(|info| info.category == ElementCategory::Nature)
            .map(|info| info.kind)
            .collect();
        assert_eq!(
            nature,
            vec![ElementKind::Tree, ElementKind::River, ElementKind::Mountain]
        );
        assert_eq!(ElementKind::Factory.category(), ElementCategory::Industry);
    }

    #[test]
    fn indices_are_dense_and_unique() {
        let mut seen = [false; 9];
        for kind in ElementKind::ALL {
            assert!(!seen[kind.index()]);
            seen[kind.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ElementKind::Educator).unwrap();
        assert_eq!(json, "\"educator\"");
    }
}
