//! In-memory DXF document.
//!
//! A document is created empty at a target version, populated with
//! converted entities, serialized once, and discarded. It owns the layer,
//! line type and text style tables and allocates entity handles.

use crate::entities::{Entity, EntityType};
use crate::tables::{Layer, LineType, Table, TableEntry, TextStyle};
use crate::types::{BoundingBox2D, DxfVersion, Handle};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Difference between the unix epoch and the julian day zero point.
const UNIX_EPOCH_JULIAN_DAY: f64 = 2440587.5;

/// Convert a UTC timestamp to the julian-day double stored in
/// `$TDCREATE`/`$TDUPDATE`.
pub fn julian_day(timestamp: DateTime<Utc>) -> f64 {
    timestamp.timestamp() as f64 / 86_400.0 + UNIX_EPOCH_JULIAN_DAY
}

/// A DXF document holding the drawing data for one conversion
#[derive(Debug, Clone)]
pub struct DxfDocument {
    /// Document version
    pub version: DxfVersion,
    /// `$INSUNITS` drawing unit code
    pub insunits: i16,
    /// `$TDCREATE` julian timestamp
    pub created: f64,
    /// `$TDUPDATE` julian timestamp
    pub updated: f64,

    /// Layer table
    pub layers: Table<Layer>,
    /// Line type table
    pub line_types: Table<LineType>,
    /// Text style table
    pub text_styles: Table<TextStyle>,

    /// Model-space entities in insertion order
    entities: Vec<EntityType>,
    /// Next handle to assign
    next_handle: u64,
}

impl DxfDocument {
    /// Create a new empty document at the default version
    pub fn new() -> Self {
        let now = julian_day(Utc::now());
        let mut doc = DxfDocument {
            version: DxfVersion::AC1024,
            insunits: 0,
            created: now,
            updated: now,
            layers: Table::new(),
            line_types: Table::new(),
            text_styles: Table::new(),
            entities: Vec::new(),
            next_handle: 0x10,
        };
        doc.initialize_defaults();
        doc
    }

    /// Create a document with a specific version
    pub fn with_version(version: DxfVersion) -> Self {
        let mut doc = Self::new();
        doc.version = version;
        doc
    }

    /// Initialize the standard table entries every document carries
    fn initialize_defaults(&mut self) {
        let mut layer0 = Layer::layer_0();
        layer0.set_handle(self.allocate_handle());
        self.layers.add(layer0).ok();

        for mut line_type in [
            LineType::continuous(),
            LineType::by_layer(),
            LineType::by_block(),
        ] {
            line_type.set_handle(self.allocate_handle());
            self.line_types.add(line_type).ok();
        }

        let mut standard = TextStyle::standard();
        standard.set_handle(self.allocate_handle());
        self.text_styles.add(standard).ok();
    }

    /// Allocate a new unique handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// Get the next handle value (without allocating)
    pub fn next_handle(&self) -> u64 {
        self.next_handle
    }

    /// Add a layer unless one with the same name already exists
    pub fn add_layer(&mut self, layer: Layer) {
        if self.layers.contains(layer.name()) {
            return;
        }
        let mut layer = layer;
        layer.set_handle(self.allocate_handle());
        self.layers.add(layer).ok();
    }

    /// Add an entity, assigning it a handle.
    ///
    /// Polylines additionally reserve one handle per vertex plus one for
    /// the SEQEND record, used by the serializer for sub-records.
    pub fn add_entity(&mut self, mut entity: EntityType) -> Handle {
        let handle = self.allocate_handle();
        entity.as_entity_mut().set_handle(handle);
        if let EntityType::Polyline(polyline) = &entity {
            self.next_handle += polyline.vertices.len() as u64 + 1;
        }
        self.entities.push(entity);
        handle
    }

    /// Iterate over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.iter()
    }

    /// Get the number of entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Entity counts grouped by type name
    pub fn entity_counts(&self) -> IndexMap<&'static str, usize> {
        let mut counts = IndexMap::new();
        for entity in &self.entities {
            *counts.entry(entity.type_name()).or_insert(0) += 1;
        }
        counts
    }

    /// Drawing extents over all entities, if any
    pub fn extents(&self) -> Option<BoundingBox2D> {
        let mut iter = self.entities.iter().map(|e| e.as_entity().bounding_box());
        let mut extents = iter.next()?;
        for bounds in iter {
            extents.expand_to_include(bounds.min);
            extents.expand_to_include(bounds.max);
        }
        Some(extents)
    }
}

impl Default for DxfDocument {
    fn default() -> Self {
        Self::new()
    }
}
