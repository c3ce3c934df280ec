/// Gallery content: the fixed set of before/after pairs
///
/// The records are compiled in. `cards` resolves them against the asset
/// directory and prepares the labels the card view shows.
use std::path::{Path, PathBuf};

use super::data::ShowcaseRecord;

/// All showcase entries, in display order
pub const SHOWCASE: [ShowcaseRecord; 4] = [
    ShowcaseRecord {
        id: 1,
        original_image: "showcase/01-original.jpg",
        processed_image: "showcase/01-edges.jpg",
        lower: 50,
        upper: 150,
        blur: 5,
        fps: "40-55",
    },
    ShowcaseRecord {
        id: 2,
        original_image: "showcase/02-original.jpg",
        processed_image: "showcase/02-edges.jpg",
        lower: 31,
        upper: 40,
        blur: 2,
        fps: "40-55",
    },
    ShowcaseRecord {
        id: 3,
        original_image: "showcase/03-original.jpg",
        processed_image: "showcase/03-edges.jpg",
        lower: 40,
        upper: 120,
        blur: 7,
        fps: "40-55",
    },
    ShowcaseRecord {
        id: 4,
        original_image: "showcase/04-original.jpg",
        processed_image: "showcase/04-edges.jpg",
        lower: 70,
        upper: 200,
        blur: 5,
        fps: "40-55",
    },
];

/// A labelled value in the card's parameter row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub label: &'static str,
    pub value: String,
    /// Rendered in the accent color
    pub accent: bool,
}

/// Everything one gallery card needs
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    /// "VIDEO #01" style heading
    pub title: String,
    pub original: PathBuf,
    pub processed: PathBuf,
    pub parameters: [Parameter; 4],
}

impl Card {
    /// Build the card for the record at `index` (0-based)
    pub fn new(index: usize, record: &ShowcaseRecord, asset_dir: &Path) -> Self {
        Self {
            id: record.id,
            title: format!("VIDEO #{:02}", index + 1),
            original: asset_dir.join(record.original_image),
            processed: asset_dir.join(record.processed_image),
            parameters: [
                Parameter {
                    label: "FPS",
                    value: record.fps.to_string(),
                    accent: true,
                },
                Parameter {
                    label: "Lower",
                    value: record.lower.to_string(),
                    accent: false,
                },
                Parameter {
                    label: "Upper",
                    value: record.upper.to_string(),
                    accent: false,
                },
                Parameter {
                    label: "Blur",
                    value: record.blur.to_string(),
                    accent: false,
                },
            ],
        }
    }

    /// Look up a parameter value by its label
    pub fn parameter(&self, label: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.value.as_str())
    }
}

/// One card per record, same order
pub fn cards(records: &[ShowcaseRecord], asset_dir: &Path) -> Vec<Card> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| Card::new(index, record, asset_dir))
        .collect()
}
