//! Aggregation of classified findings into named display groups
//!
//! Groups are keyed by display name and kept in first-seen order. Each
//! group accumulates pre-rendered entry fragments plus a running feature
//! count. A group renders either as named subgroups (entries that carry a
//! parameter block) or as a flat feature list (entries that do not); the
//! mode is decided by the first entry added to the group.

use std::io;

use crate::report::classify::Rgb;
use crate::report::writer::JsonWriter;

/// A pre-rendered group entry, spliced verbatim into the document
#[derive(Debug, Clone)]
pub struct SerializedEntry {
    pub data: String,
    pub has_params: bool,
}

#[derive(Debug)]
struct FeatureGroup {
    name: &'static str,
    color: Rgb,
    entries: Vec<SerializedEntry>,
    feature_count: u32,
}

/// Accumulates display groups for one findings section
#[derive(Debug, Default)]
pub struct FeatureGroupManager {
    groups: Vec<FeatureGroup>,
}

impl FeatureGroupManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the group with the given name, creating the group at
    /// the end of the sequence on first sight.
    pub fn add(&mut self, name: &'static str, color: Rgb, entry: SerializedEntry, count: u32) {
        let index = match self.groups.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(FeatureGroup {
                    name,
                    color,
                    entries: Vec::new(),
                    feature_count: 0,
                });
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[index];
        group.entries.push(entry);
        group.feature_count += count;
    }

    /// Sum of feature counts across all groups
    pub fn total_feature_count(&self) -> u32 {
        self.groups.iter().map(|g| g.feature_count).sum()
    }

    /// Render every group into the currently open featureGroups array.
    pub fn write<W: io::Write>(&self, writer: &mut JsonWriter<W>) -> io::Result<()> {
        for group in &self.groups {
            writer.open_object()?;
            writer.write_field("name", group.name)?;
            writer.write_field("color", group.color)?;
            writer.write_field("totalGroupFeatureCount", group.feature_count)?;

            if let Some(first) = group.entries.first() {
                if first.has_params {
                    writer.write_field("subGroupCount", group.entries.len())?;
                    writer.open_array("subGroups")?;
                    for entry in &group.entries {
                        writer.write_raw(&entry.data)?;
                    }
                    writer.close_array()?;
                } else {
                    writer.open_array("features")?;
                    for entry in &group.entries {
                        writer.write_raw(&entry.data)?;
                    }
                    writer.close_array()?;
                }
            }

            writer.close_object()?;
        }
        Ok(())
    }
}
