//! Invitation content: event details, godparent lists, gallery and share data

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A named guest shown in a godparent list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub role: String,
}

impl Entry {
    pub fn new(name: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
        }
    }
}

/// One card of the event details grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub label: String,
    pub value: String,
    pub description: String,
}

impl EventDetail {
    fn new(label: &str, value: &str, description: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            description: description.to_string(),
        }
    }
}

/// A gallery slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub caption: String,
}

/// Data handed to the share capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Everything shown on the invitation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invitation {
    pub pre_title: String,
    pub title: String,
    pub honoree: String,
    /// Short name used in the footer and share text
    pub honoree_short: String,
    pub details: Vec<EventDetail>,
    pub godfathers: Vec<Entry>,
    pub godmothers: Vec<Entry>,
    pub photos: Vec<Photo>,
    pub share: ShareData,
    pub signoff: String,
}

impl Default for Invitation {
    fn default() -> Self {
        let godfathers = [
            "Tristan Timan",
            "Llyhnro Domalaon",
            "Gibson Pornias",
            "John Albert Valles",
            "Daniel Doculan Jr.",
            "Ezyquiel Brynn Tugado",
            "Julius Ivan Philip Reveche",
            "Carl Lawrenz Reveche",
            "Andrian Arididon",
            "Frisco Llever",
            "Jethro Gabin",
            "Rubenson Lim",
            "Bernie Labrague",
            "Panchito Brigildo",
        ]
        .iter()
        .map(|name| Entry::new(name, "Godfather"))
        .collect();

        let godmothers = [
            "Jenerose Domincel",
            "Jocel Arbalate",
            "Mica Lejas",
            "Ma. Jessa Laboc",
            "Lizette Cordero",
            "Liezel Tugado",
            "Rialyn Dacuma",
        ]
        .iter()
        .map(|name| Entry::new(name, "Godmother"))
        .collect();

        Self {
            pre_title: "You are cordially invited to".to_string(),
            title: "Christening".to_string(),
            honoree: "Matteo Adam C. Paragatos".to_string(),
            honoree_short: "Matteo Adam".to_string(),
            details: vec![
                EventDetail::new("Date", "Sunday, December 21, 2025", "Mark your calendars"),
                EventDetail::new("Time", "10:00 AM", "Ceremony begins promptly"),
                EventDetail::new(
                    "Venue",
                    "St. Francis of Assisi Parish",
                    "Near Silanga Elementary School",
                ),
                EventDetail::new("Dress Code", "Smart Casual", "Soft pastels encouraged"),
            ],
            godfathers,
            godmothers,
            photos: (1..=3)
                .map(|n| Photo {
                    caption: format!("Baby Matteo Adam - Photo {n}"),
                })
                .collect(),
            share: ShareData {
                title: "Matteo Adam's Christening Celebration".to_string(),
                text: "You're invited to celebrate the christening of Matteo Adam!".to_string(),
                url: "https://matteo-adam-christening.example.com".to_string(),
            },
            signoff: "With love and gratitude,".to_string(),
        }
    }
}

impl Invitation {
    /// Load invitation content from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path)?;
        let invitation: Invitation = serde_json::from_str(&content)?;
        invitation.validate()?;
        Ok(invitation)
    }

    /// Check that both lists have non-empty, unique names and that the gallery has photos
    pub fn validate(&self) -> Result<(), ContentError> {
        validate_entries("Godfathers", &self.godfathers)?;
        validate_entries("Godmothers", &self.godmothers)?;
        if self.photos.is_empty() {
            return Err(ContentError::NoPhotos);
        }
        Ok(())
    }

    /// Footer line naming the family
    pub fn family_line(&self) -> String {
        format!("The Family of {}", self.honoree_short)
    }
}

fn validate_entries(list: &'static str, entries: &[Entry]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(ContentError::EmptyName { list });
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(ContentError::DuplicateName {
                list,
                name: entry.name.clone(),
            });
        }
    }
    Ok(())
}
