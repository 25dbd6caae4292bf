use crate::core::extractor::{declaration_name, FieldExtractor};
use crate::core::renderer::AccessorRenderer;
use crate::core::{ConfigProvider, EditorPort, GenerationOutcome, Position, Property};
use crate::utils::error::Result;

/// Reads the active document through an [`EditorPort`], extracts the data
/// declaration for its file and inserts the accessor block at the start of
/// the cursor line.
#[derive(Debug, Clone, Default)]
pub struct AccessorGenerator {
    extractor: FieldExtractor,
    renderer: AccessorRenderer,
    declaration_override: Option<String>,
}

impl AccessorGenerator {
    pub fn new(extractor: FieldExtractor, renderer: AccessorRenderer) -> Self {
        Self {
            extractor,
            renderer,
            declaration_override: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            FieldExtractor::from_config(config),
            AccessorRenderer::from_config(config),
        )
    }

    /// Look for this declaration name instead of the file stem.
    pub fn with_declaration(mut self, declaration: Option<String>) -> Self {
        self.declaration_override = declaration;
        self
    }

    pub fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    pub fn renderer(&self) -> &AccessorRenderer {
        &self.renderer
    }

    pub fn declaration_for(&self, file_name: &str) -> Option<String> {
        self.declaration_override
            .clone()
            .or_else(|| declaration_name(file_name))
    }

    /// Extracts the properties of the active document without editing it.
    /// `None` when there is no active document to read.
    pub fn properties<E: EditorPort + ?Sized>(
        &self,
        editor: &E,
    ) -> Result<Option<(String, Vec<Property>)>> {
        let Some(lines) = editor.active_document_lines() else {
            return Ok(None);
        };
        let Some(declaration) = editor
            .active_file_name()
            .and_then(|file_name| self.declaration_for(&file_name))
        else {
            return Ok(None);
        };

        let properties = self.extractor.extract(&lines, &declaration)?;
        Ok(Some((declaration, properties)))
    }

    pub fn run<E: EditorPort + ?Sized>(&self, editor: &mut E) -> Result<GenerationOutcome> {
        let Some((declaration, properties)) = self.properties(&*editor)? else {
            tracing::debug!("No active document, nothing to do");
            return Ok(GenerationOutcome::NoActiveDocument);
        };
        let Some(cursor) = editor.cursor_position() else {
            tracing::debug!("No cursor in the active document, nothing to do");
            return Ok(GenerationOutcome::NoActiveDocument);
        };

        if properties.is_empty() {
            tracing::debug!(
                "No properties found for {}",
                self.extractor.interface_name(&declaration)
            );
            return Ok(GenerationOutcome::NoProperties { declaration });
        }

        let position = Position::line_start(cursor.line);
        let fragments = self.renderer.fragments(&properties);

        tracing::debug!(
            "Inserting {} fragments at line {}",
            fragments.len(),
            position.line + 1
        );
        editor.apply_insertions(position, &fragments)?;

        tracing::info!(
            "Generated accessors for {} properties of {}",
            properties.len(),
            self.extractor.interface_name(&declaration)
        );

        Ok(GenerationOutcome::Inserted {
            declaration,
            properties: properties.len(),
            position,
        })
    }
}
