//! Built-in orbit item lists.
//!
//! `planets` is the solar-system look; `skills` swaps planets for
//! technology badges that carry an icon each.

use serde::Deserialize;

use crate::components::color::Color;
use crate::components::orbit_item::OrbitItem;

/// Which built-in item list to orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Planets,
    Skills,
}

impl Preset {
    pub fn items(self) -> Vec<OrbitItem> {
        match self {
            Preset::Planets => planets(),
            Preset::Skills => skills(),
        }
    }
}

/// Mercury through Neptune. Saturn carries the ring.
pub fn planets() -> Vec<OrbitItem> {
    vec![
        OrbitItem::new("Mercury", 60.0, 4.0, Color::rgb(0xa0, 0xa0, 0xa0), 0.02),
        OrbitItem::new("Venus", 95.0, 6.0, Color::rgb(0xe8, 0xc7, 0x6a), 0.015),
        OrbitItem::new("Earth", 135.0, 7.0, Color::rgb(0x4d, 0x9d, 0xe0), 0.012),
        OrbitItem::new("Mars", 175.0, 5.0, Color::rgb(0xe0, 0x6c, 0x4d), 0.009),
        OrbitItem::new("Jupiter", 240.0, 14.0, Color::rgb(0xd4, 0xa3, 0x73), 0.005),
        OrbitItem::new("Saturn", 310.0, 12.0, Color::rgb(0xc9, 0xb0, 0x6b), 0.003).with_ring(),
        OrbitItem::new("Uranus", 370.0, 9.0, Color::rgb(0x7e, 0xc8, 0xe3), 0.002),
        OrbitItem::new("Neptune", 420.0, 8.0, Color::rgb(0x41, 0x69, 0xe1), 0.001),
    ]
}

/// Skill badges, inner to outer. Icon paths are relative to the site root.
pub fn skills() -> Vec<OrbitItem> {
    vec![
        OrbitItem::new("Python", 70.0, 8.0, Color::rgb(0x37, 0x76, 0xab), 0.018)
            .with_icon("icons/python.svg"),
        OrbitItem::new("Java", 105.0, 7.0, Color::rgb(0xf8, 0x98, 0x20), 0.014)
            .with_icon("icons/java.svg"),
        OrbitItem::new("JavaScript", 140.0, 7.0, Color::rgb(0xf7, 0xdf, 0x1e), 0.011)
            .with_icon("icons/javascript.svg"),
        OrbitItem::new("SQL", 175.0, 6.0, Color::rgb(0x33, 0x67, 0x91), 0.009)
            .with_icon("icons/sql.svg"),
        OrbitItem::new("React", 215.0, 9.0, Color::rgb(0x61, 0xda, 0xfb), 0.007)
            .with_icon("icons/react.svg")
            .with_ring(),
        OrbitItem::new("Django", 255.0, 7.0, Color::rgb(0x44, 0xb7, 0x8b), 0.005)
            .with_icon("icons/django.svg"),
        OrbitItem::new("AWS", 295.0, 10.0, Color::rgb(0xff, 0x99, 0x00), 0.0035)
            .with_icon("icons/aws.svg"),
        OrbitItem::new("Docker", 340.0, 9.0, Color::rgb(0x24, 0x96, 0xed), 0.0025)
            .with_icon("icons/docker.svg"),
        OrbitItem::new("Git", 385.0, 8.0, Color::rgb(0xf0, 0x50, 0x32), 0.0015)
            .with_icon("icons/git.svg"),
    ]
}
