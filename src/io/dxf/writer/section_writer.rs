//! DXF section writers
//!
//! Serializes a [`DxfDocument`] section by section: HEADER, TABLES
//! (LTYPE, LAYER, STYLE) and ENTITIES.

use crate::document::DxfDocument;
use crate::entities::{Circle, Entity, EntityType, Line, Polyline, Text};
use crate::error::Result;
use crate::tables::{Layer, LineType, TableEntry, TextStyle};
use crate::types::{Color, Handle, LineWeight};

use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};

/// Well-known table handles, consistent across DXF files for
/// interoperability
const HANDLE_LTYPE_TABLE: u64 = 0x5;
const HANDLE_LAYER_TABLE: u64 = 0x2;
const HANDLE_STYLE_TABLE: u64 = 0x3;
/// Owner handle assigned to model-space entities
const HANDLE_MODEL_SPACE: u64 = 0x1F;

/// Writes all DXF sections
pub struct SectionWriter<'a, W: DxfStreamWriter> {
    writer: &'a mut W,
}

impl<'a, W: DxfStreamWriter> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    /// Serialize the whole document
    pub fn write_document(&mut self, document: &DxfDocument) -> Result<()> {
        self.write_header(document)?;
        self.write_tables(document)?;
        self.write_entities(document)?;
        self.writer.write_eof()?;
        Ok(())
    }

    /// Write the HEADER section
    pub fn write_header(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("HEADER")?;

        self.write_header_variable("$ACADVER", |w| {
            w.write_string(1, document.version.to_dxf_string())
        })?;

        self.write_header_variable("$HANDSEED", |w| {
            w.write_handle(5, Handle::new(document.next_handle()))
        })?;

        self.write_header_variable("$INSUNITS", |w| w.write_i16(70, document.insunits))?;

        self.write_header_variable("$TDCREATE", |w| w.write_double(40, document.created))?;
        self.write_header_variable("$TDUPDATE", |w| w.write_double(40, document.updated))?;

        // Drawing extents
        let extents = document.extents();
        let (min, max) = extents
            .map(|b| (b.min, b.max))
            .unwrap_or((Default::default(), Default::default()));
        self.write_header_variable("$EXTMIN", |w| {
            w.write_double(10, min.x)?;
            w.write_double(20, min.y)?;
            w.write_double(30, 0.0)
        })?;
        self.write_header_variable("$EXTMAX", |w| {
            w.write_double(10, max.x)?;
            w.write_double(20, max.y)?;
            w.write_double(30, 0.0)
        })?;

        // Current layer
        self.write_header_variable("$CLAYER", |w| w.write_string(8, "0"))?;

        // Measurement (0=English, 1=Metric)
        self.write_header_variable("$MEASUREMENT", |w| w.write_i16(70, 1))?;

        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write a header variable
    fn write_header_variable<F>(&mut self, name: &str, write_value: F) -> Result<()>
    where
        F: FnOnce(&mut W) -> Result<()>,
    {
        self.writer.write_string(9, name)?;
        write_value(self.writer)
    }

    /// Write the TABLES section
    pub fn write_tables(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("TABLES")?;

        self.write_ltype_table(document)?;
        self.write_layer_table(document)?;
        self.write_style_table(document)?;

        self.writer.write_section_end()?;
        Ok(())
    }

    fn write_ltype_table(&mut self, document: &DxfDocument) -> Result<()> {
        self.write_table_header(
            "LTYPE",
            document.line_types.len(),
            Handle::new(HANDLE_LTYPE_TABLE),
        )?;
        for ltype in document.line_types.iter() {
            self.write_ltype_entry(ltype, Handle::new(HANDLE_LTYPE_TABLE))?;
        }
        self.write_table_end()
    }

    fn write_ltype_entry(&mut self, ltype: &LineType, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "LTYPE")?;
        self.write_common_table_data(ltype.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbLinetypeTableRecord")?;
        self.writer.write_string(2, ltype.name())?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_string(3, &ltype.description)?;
        self.writer.write_i16(72, 65)?; // Alignment code (always 65)
        self.writer.write_i16(73, ltype.elements.len() as i16)?;
        self.writer.write_double(40, ltype.pattern_length)?;
        for element in &ltype.elements {
            self.writer.write_double(49, element.length)?;
            self.writer.write_i16(74, 0)?;
        }
        Ok(())
    }

    fn write_layer_table(&mut self, document: &DxfDocument) -> Result<()> {
        self.write_table_header(
            "LAYER",
            document.layers.len(),
            Handle::new(HANDLE_LAYER_TABLE),
        )?;
        for layer in document.layers.iter() {
            self.write_layer_entry(layer, Handle::new(HANDLE_LAYER_TABLE))?;
        }
        self.write_table_end()
    }

    fn write_layer_entry(&mut self, layer: &Layer, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "LAYER")?;
        self.write_common_table_data(layer.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbLayerTableRecord")?;
        self.writer.write_string(2, layer.name())?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_color(62, layer.color)?;
        self.writer.write_string(6, &layer.line_type)?;
        self.writer.write_i16(370, layer.line_weight.raw())?;
        self.writer.write_bool(290, layer.is_plottable)?;
        Ok(())
    }

    fn write_style_table(&mut self, document: &DxfDocument) -> Result<()> {
        self.write_table_header(
            "STYLE",
            document.text_styles.len(),
            Handle::new(HANDLE_STYLE_TABLE),
        )?;
        for style in document.text_styles.iter() {
            self.write_style_entry(style, Handle::new(HANDLE_STYLE_TABLE))?;
        }
        self.write_table_end()
    }

    fn write_style_entry(&mut self, style: &TextStyle, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "STYLE")?;
        self.write_common_table_data(style.handle(), owner)?;
        self.writer.write_subclass("AcDbSymbolTableRecord")?;
        self.writer.write_subclass("AcDbTextStyleTableRecord")?;
        self.writer.write_string(2, style.name())?;
        self.writer.write_i16(70, 0)?;
        self.writer.write_double(40, style.height)?;
        self.writer.write_double(41, style.width_factor)?;
        self.writer.write_double(50, style.oblique_angle)?;
        self.writer.write_i16(71, 0)?; // Text generation flags
        self.writer.write_double(42, style.height)?; // Last height used
        self.writer.write_string(3, &style.font_file)?;
        self.writer.write_string(4, "")?;
        Ok(())
    }

    /// Write table header
    fn write_table_header(&mut self, name: &str, count: usize, table_handle: Handle) -> Result<()> {
        self.writer.write_string(0, "TABLE")?;
        self.writer.write_string(2, name)?;
        self.writer.write_handle(5, table_handle)?;
        self.writer.write_handle(330, Handle::NULL)?; // Tables owned by document root
        self.writer.write_subclass("AcDbSymbolTable")?;
        self.writer.write_i16(70, count as i16)?;
        Ok(())
    }

    /// Write table end
    fn write_table_end(&mut self) -> Result<()> {
        self.writer.write_string(0, "ENDTAB")
    }

    /// Write common table entry data
    fn write_common_table_data(&mut self, handle: Handle, owner: Handle) -> Result<()> {
        self.writer.write_handle(5, handle)?;
        self.writer.write_handle(330, owner)?;
        Ok(())
    }

    /// Write the ENTITIES section (model space)
    pub fn write_entities(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("ENTITIES")?;

        let owner = Handle::new(HANDLE_MODEL_SPACE);
        for entity in document.entities() {
            match entity {
                EntityType::Line(e) => self.write_line(e, owner)?,
                EntityType::Polyline(e) => self.write_polyline(e, owner)?,
                EntityType::Circle(e) => self.write_circle(e, owner)?,
                EntityType::Text(e) => self.write_text(e, owner)?,
            }
        }

        self.writer.write_section_end()?;
        Ok(())
    }

    /// Write common entity data with owner
    fn write_common_entity_data(&mut self, entity: &dyn Entity, owner: Handle) -> Result<()> {
        self.writer.write_handle(5, entity.handle())?;
        self.writer.write_handle(330, owner)?;
        self.writer.write_subclass("AcDbEntity")?;
        self.writer.write_string(8, entity.layer())?;

        // Write color only if not ByLayer (default)
        let color = entity.color();
        if color != Color::ByLayer {
            self.writer.write_color(62, color)?;
        }

        Ok(())
    }

    /// Stroke widths map to lineweights in hundredths of a drawing unit
    fn write_lineweight(&mut self, width: f64) -> Result<()> {
        if width > 0.0 {
            self.writer
                .write_i16(370, LineWeight::from_drawing_units(width).raw())?;
        }
        Ok(())
    }

    /// Write LINE entity
    fn write_line(&mut self, line: &Line, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "LINE")?;
        self.write_common_entity_data(line, owner)?;
        self.write_lineweight(line.width)?;
        self.writer.write_subclass("AcDbLine")?;
        self.writer.write_point3d(10, line.start)?;
        self.writer.write_point3d(11, line.end)?;
        Ok(())
    }

    /// Write POLYLINE entity (2D polyline with VERTEX/SEQEND records)
    fn write_polyline(&mut self, polyline: &Polyline, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "POLYLINE")?;
        self.write_common_entity_data(polyline, owner)?;
        self.write_lineweight(polyline.width)?;
        self.writer.write_subclass("AcDb2dPolyline")?;

        // VERTEX records follow
        self.writer.write_i16(66, 1)?;
        self.writer.write_i16(70, polyline.flags.bits())?;

        // Filled shapes carry a constant width
        if polyline.filled && polyline.width > 0.0 {
            self.writer.write_double(40, polyline.width)?;
            self.writer.write_double(41, polyline.width)?;
        }

        // VERTEX and SEQEND handles live in the range the document
        // reserved directly after the polyline's own handle.
        let polyline_handle = polyline.common.handle;
        let base_handle = polyline_handle.value();

        for (i, vertex) in polyline.vertices.iter().enumerate() {
            self.writer.write_string(0, "VERTEX")?;
            self.writer
                .write_handle(5, Handle::new(base_handle + i as u64 + 1))?;
            self.writer.write_handle(330, polyline_handle)?;
            self.writer.write_subclass("AcDbEntity")?;
            self.writer.write_string(8, &polyline.common.layer)?;
            self.writer.write_subclass("AcDbVertex")?;
            self.writer.write_subclass("AcDb2dVertex")?;
            self.writer.write_point3d(10, *vertex)?;
            self.writer.write_i16(70, 0)?;
        }

        self.writer.write_string(0, "SEQEND")?;
        self.writer.write_handle(
            5,
            Handle::new(base_handle + polyline.vertices.len() as u64 + 1),
        )?;
        self.writer.write_handle(330, polyline_handle)?;
        self.writer.write_subclass("AcDbEntity")?;
        self.writer.write_subclass("AcDbSequenceEnd")?;
        self.writer.write_string(8, &polyline.common.layer)?;

        Ok(())
    }

    /// Write CIRCLE entity
    fn write_circle(&mut self, circle: &Circle, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "CIRCLE")?;
        self.write_common_entity_data(circle, owner)?;
        self.write_lineweight(circle.width)?;
        self.writer.write_subclass("AcDbCircle")?;
        self.writer.write_point3d(10, circle.center)?;
        self.writer.write_double(40, circle.radius)?;
        Ok(())
    }

    /// Write TEXT entity
    fn write_text(&mut self, text: &Text, owner: Handle) -> Result<()> {
        self.writer.write_string(0, "TEXT")?;
        self.write_common_entity_data(text, owner)?;
        self.writer.write_subclass("AcDbText")?;
        self.writer.write_point3d(10, text.position)?;
        self.writer.write_double(40, text.height)?;
        self.writer.write_string(1, &text.value)?;
        self.writer.write_string(7, "Standard")?;
        self.writer.write_subclass("AcDbText")?;
        Ok(())
    }
}
