//! Single-document compression session.

use mx_catalog::Catalog;
use mx_compressor::assemble;
use mx_core::{ElementNode, MxError, Result, SortOrder};
use mx_parser::parse_tree;
use std::path::PathBuf;

/// Input source for a single-document session.
///
/// A session holds exactly one source; the former tree/content/path
/// priority rule is enforced by construction.
#[derive(Debug, Clone)]
pub enum InputSource {
    Tree(ElementNode),
    Content(String),
    Path(PathBuf),
}

/// Immutable configuration consumed by a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub source: InputSource,
    pub sort_order: SortOrder,
}

impl SessionConfig {
    pub fn new(source: InputSource) -> Self {
        Self {
            source,
            sort_order: SortOrder::default(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(InputSource::Path(path.into()))
    }

    pub fn from_content(content: impl Into<String>) -> Self {
        Self::new(InputSource::Content(content.into()))
    }

    pub fn from_tree(tree: ElementNode) -> Self {
        Self::new(InputSource::Tree(tree))
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Render a parsed tree against the catalog.
pub(crate) fn compress_tree(
    catalog: &Catalog,
    tree: &ElementNode,
    sort_order: SortOrder,
) -> Result<String> {
    let type_name = tree
        .root_key()
        .ok_or_else(|| MxError::InvalidInput("document has no single root element".to_string()))?;
    let definition = catalog
        .get_definition(type_name)
        .ok_or_else(|| MxError::unsupported_type(type_name))?;
    let root = tree
        .child(type_name)
        .ok_or_else(|| MxError::unsupported_type(type_name))?;
    assemble(type_name, root, &definition, sort_order)
}

/// One compression session: resolves its input once, renders once, and
/// serves the memoized result afterwards.
pub struct CompressorSession {
    config: SessionConfig,
    catalog: Catalog,
    compressed: Option<String>,
}

impl CompressorSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            compressed: None,
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        self.config.sort_order
    }

    /// Canonical text for the configured input. The first call renders;
    /// later calls return the memoized result.
    pub fn compressed_content(&mut self) -> Result<String> {
        if let Some(cached) = &self.compressed {
            return Ok(cached.clone());
        }
        let tree = self.resolve_input_sync()?;
        self.render_tree(&tree)
    }

    /// Async variant of [`CompressorSession::compressed_content`].
    pub async fn compressed_content_async(&mut self) -> Result<String> {
        if let Some(cached) = &self.compressed {
            return Ok(cached.clone());
        }
        let tree = self.resolve_input_async().await?;
        self.render_tree(&tree)
    }

    /// Compress the configured file in place.
    pub fn compress_file(&mut self) -> Result<()> {
        let path = self.require_path()?;
        let content = self.compressed_content()?;
        mx_storage::write_string_sync(&path, &content)
    }

    /// Async variant of [`CompressorSession::compress_file`].
    pub async fn compress_file_async(&mut self) -> Result<()> {
        let path = self.require_path()?;
        let content = self.compressed_content_async().await?;
        mx_storage::write_string(&path, &content).await
    }

    fn require_path(&self) -> Result<PathBuf> {
        match &self.config.source {
            InputSource::Path(path) => Ok(path.clone()),
            _ => Err(MxError::InvalidInput(
                "in-place compression requires a file path input".to_string(),
            )),
        }
    }

    fn render_tree(&mut self, tree: &ElementNode) -> Result<String> {
        let rendered = compress_tree(&self.catalog, tree, self.config.sort_order)?;
        self.compressed = Some(rendered.clone());
        Ok(rendered)
    }

    fn resolve_input_sync(&self) -> Result<ElementNode> {
        match &self.config.source {
            InputSource::Tree(tree) => Ok(tree.clone()),
            InputSource::Content(content) => parse_tree(content, true),
            InputSource::Path(path) => {
                self.check_single_file()?;
                let content = mx_storage::read_to_string_sync(path)?;
                parse_tree(&content, true)
            }
        }
    }

    async fn resolve_input_async(&self) -> Result<ElementNode> {
        match &self.config.source {
            InputSource::Tree(tree) => Ok(tree.clone()),
            InputSource::Content(content) => parse_tree(content, true),
            InputSource::Path(path) => {
                self.check_single_file()?;
                let content = mx_storage::read_to_string(path).await?;
                parse_tree(&content, true)
            }
        }
    }

    fn check_single_file(&self) -> Result<()> {
        if let InputSource::Path(path) = &self.config.source {
            if mx_storage::is_dir(path) {
                return Err(MxError::InvalidInput(format!(
                    "can't compress a directory, select a single file: {}",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}
