// crates/wilayah-core/src/model/builder.rs
//! Two-phase construction of a [`RegionHierarchy`].
//!
//! Phase one ([`HierarchyBuilder::push_line`]) accumulates records into
//! per-level arenas keyed by code, synthesizing unnamed ancestors when a
//! child arrives first. Phase two ([`HierarchyBuilder::finish`]) sorts every
//! level by name and hands out the immutable hierarchy.

use super::code::{split_region_code, RegionCodeParts, RegionLevel};
use super::domain::{District, Province, Regency, RegionHierarchy, Village};
use crate::text::sort_key;
use std::collections::HashMap;

/// Why a line did not make it into the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    MissingComma,
    EmptyCode,
    EmptyName,
    /// A segment between dots is empty (`"36..01"`).
    EmptySegment,
    /// Segment count outside `1..=4`.
    UnsupportedDepth(usize),
}

/// What a single line did to the hierarchy under construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// A new node was created for the line's code.
    Inserted(RegionLevel),
    /// An existing unnamed placeholder received its name.
    Backfilled(RegionLevel),
    /// The code was already known and named; nothing changed.
    Unchanged(RegionLevel),
    Skipped(SkipReason),
}

/// Mutable accumulator for phase one of the build.
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    provinces: Vec<Province>,
    regencies: Vec<Regency>,
    districts: Vec<District>,
    villages: Vec<Village>,

    province_map: HashMap<String, u32>,
    regency_map: HashMap<String, u32>,
    district_map: HashMap<String, u32>,
    village_map: HashMap<String, u32>,

    skipped: usize,
}

/// Build a hierarchy from the raw `<code>,<name>` text in one pass.
///
/// Malformed lines are skipped, never fatal.
pub fn build_hierarchy(raw_text: &str) -> RegionHierarchy {
    let mut builder = HierarchyBuilder::new();
    builder.push_text(raw_text);
    builder.finish()
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed every line of `raw_text`.
    pub fn push_text(&mut self, raw_text: &str) {
        let raw_text = raw_text.strip_prefix('\u{feff}').unwrap_or(raw_text);
        for (index, line) in raw_text.lines().enumerate() {
            if let LineOutcome::Skipped(reason) = self.push_line(line) {
                if reason != SkipReason::Blank {
                    tracing::debug!(line = index + 1, ?reason, "skipping region line");
                }
            }
        }
    }

    /// Parse and insert one `<code>,<name>` line.
    ///
    /// The name is everything after the first comma, so it may itself
    /// contain commas.
    pub fn push_line(&mut self, line: &str) -> LineOutcome {
        if line.trim().is_empty() {
            return LineOutcome::Skipped(SkipReason::Blank);
        }
        match line.split_once(',') {
            Some((code, name)) => self.push_record(code, name),
            None => self.reject(SkipReason::MissingComma),
        }
    }

    /// Insert one record; `code` and `name` are trimmed first.
    pub fn push_record(&mut self, code: &str, name: &str) -> LineOutcome {
        let code = code.trim();
        let name = name.trim();
        if code.is_empty() {
            return self.reject(SkipReason::EmptyCode);
        }
        if name.is_empty() {
            return self.reject(SkipReason::EmptyName);
        }
        if code.split('.').any(str::is_empty) {
            return self.reject(SkipReason::EmptySegment);
        }
        let depth = code.split('.').count();
        let Some(level) = RegionLevel::from_depth(depth) else {
            return self.reject(SkipReason::UnsupportedDepth(depth));
        };

        let parts = split_region_code(code);
        match level {
            RegionLevel::Province => {
                let known = self.province_map.contains_key(code);
                let id = self.ensure_province(&parts.province_code);
                let filled = backfill(&mut self.provinces[id as usize].name, name);
                classify(level, known, filled)
            }
            RegionLevel::Regency => {
                let known = self.regency_map.contains_key(code);
                let id = self.ensure_regency(&parts);
                let filled = backfill(&mut self.regencies[id as usize].name, name);
                classify(level, known, filled)
            }
            RegionLevel::District => {
                let known = self.district_map.contains_key(code);
                let id = self.ensure_district(&parts);
                let filled = backfill(&mut self.districts[id as usize].name, name);
                classify(level, known, filled)
            }
            RegionLevel::Village => {
                if self.village_map.contains_key(code) {
                    return LineOutcome::Unchanged(level);
                }
                let parent = self.ensure_district(&parts);
                let id = self.villages.len() as u32;
                self.villages.push(Village {
                    code: parts.village_code.clone(),
                    name: name.to_owned(),
                    province_code: parts.province_code.clone(),
                    regency_code: parts.regency_code.clone(),
                    district_code: parts.district_code.clone(),
                });
                self.village_map.insert(parts.village_code, id);
                self.districts[parent as usize].villages.push(id);
                LineOutcome::Inserted(level)
            }
        }
    }

    /// Number of non-blank lines and records rejected so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn reject(&mut self, reason: SkipReason) -> LineOutcome {
        self.skipped += 1;
        LineOutcome::Skipped(reason)
    }

    // -----------------------------------------------------------------------
    // ENSURE (create-or-reuse, names start empty)
    // -----------------------------------------------------------------------

    fn ensure_province(&mut self, code: &str) -> u32 {
        if let Some(&id) = self.province_map.get(code) {
            return id;
        }
        let id = self.provinces.len() as u32;
        self.provinces.push(Province {
            code: code.to_owned(),
            name: String::new(),
            regencies: Vec::new(),
        });
        self.province_map.insert(code.to_owned(), id);
        id
    }

    fn ensure_regency(&mut self, parts: &RegionCodeParts) -> u32 {
        if let Some(&id) = self.regency_map.get(&parts.regency_code) {
            return id;
        }
        let parent = self.ensure_province(&parts.province_code);
        let id = self.regencies.len() as u32;
        self.regencies.push(Regency {
            code: parts.regency_code.clone(),
            name: String::new(),
            province_code: parts.province_code.clone(),
            districts: Vec::new(),
        });
        self.regency_map.insert(parts.regency_code.clone(), id);
        self.provinces[parent as usize].regencies.push(id);
        id
    }

    fn ensure_district(&mut self, parts: &RegionCodeParts) -> u32 {
        if let Some(&id) = self.district_map.get(&parts.district_code) {
            return id;
        }
        let parent = self.ensure_regency(parts);
        let id = self.districts.len() as u32;
        self.districts.push(District {
            code: parts.district_code.clone(),
            name: String::new(),
            province_code: parts.province_code.clone(),
            regency_code: parts.regency_code.clone(),
            villages: Vec::new(),
        });
        self.district_map.insert(parts.district_code.clone(), id);
        self.regencies[parent as usize].districts.push(id);
        id
    }

    // -----------------------------------------------------------------------
    // FINALIZE
    // -----------------------------------------------------------------------

    /// Sort every level by name and freeze the result.
    pub fn finish(self) -> RegionHierarchy {
        let HierarchyBuilder {
            mut provinces,
            mut regencies,
            mut districts,
            villages,
            province_map: _,
            regency_map,
            district_map,
            village_map,
            skipped,
        } = self;

        for district in &mut districts {
            district
                .villages
                .sort_by_cached_key(|&id| sort_key(&villages[id as usize].name));
        }
        for regency in &mut regencies {
            regency
                .districts
                .sort_by_cached_key(|&id| sort_key(&districts[id as usize].name));
        }

        for province in &mut provinces {
            province
                .regencies
                .sort_by_cached_key(|&id| sort_key(&regencies[id as usize].name));
        }
        // Provinces are the display list itself, so the arena is reordered
        // and the code index rebuilt against the new positions.
        provinces.sort_by_cached_key(|p| sort_key(&p.name));
        let province_map = provinces
            .iter()
            .enumerate()
            .map(|(i, p)| (p.code.clone(), i as u32))
            .collect();

        tracing::info!(
            provinces = provinces.len(),
            regencies = regencies.len(),
            districts = districts.len(),
            villages = villages.len(),
            skipped,
            "region hierarchy built"
        );

        RegionHierarchy {
            provinces,
            regencies,
            districts,
            villages,
            province_map,
            regency_map,
            district_map,
            village_map,
        }
    }
}

/// Write `name` only while the slot is still an unnamed placeholder.
fn backfill(slot: &mut String, name: &str) -> bool {
    if slot.is_empty() {
        slot.push_str(name);
        true
    } else {
        false
    }
}

fn classify(level: RegionLevel, known: bool, filled: bool) -> LineOutcome {
    match (known, filled) {
        (false, _) => LineOutcome::Inserted(level),
        (true, true) => LineOutcome::Backfilled(level),
        (true, false) => LineOutcome::Unchanged(level),
    }
}
