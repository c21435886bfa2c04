//! Public exhibition pages (permanent, temporary, archive).

use museu_core::exhibition::{Category, ExhibitionRecord};
use museu_core::view::{ActiveExhibition, CategoryView, Tab};
use museu_db::{ExhibitionRepo, KeyValueStorage};

use crate::error::SiteResult;

/// Shown in place of the gallery when a category has no exhibitions.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No exhibitions found.";

/// The exhibition shown in the main gallery area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase<'a> {
    pub index: usize,
    pub title: &'a str,
    pub description: &'a str,
    pub images: Vec<&'a str>,
}

impl<'a> Showcase<'a> {
    fn of(index: usize, record: &'a ExhibitionRecord) -> Self {
        Self {
            index,
            title: &record.title,
            description: &record.description,
            images: record.visible_images().collect(),
        }
    }
}

/// Read-only browser over one category.
///
/// Every [`ExhibitionBrowser::open`] re-reads the persisted collection, so a
/// page always reflects the latest save, whichever session made it.
#[derive(Debug)]
pub struct ExhibitionBrowser<S> {
    repo: ExhibitionRepo<S>,
    view: CategoryView,
}

impl<S: KeyValueStorage> ExhibitionBrowser<S> {
    pub fn new(storage: S, category: Category) -> Self {
        let repo = ExhibitionRepo::new(storage);
        let view = CategoryView::new(&repo.load(), category);
        Self { repo, view }
    }

    /// Open the page for a public path segment (`permanent`, `temporary`,
    /// `archive` or `previous`).
    pub fn for_path(storage: S, segment: &str) -> SiteResult<Self> {
        let category = Category::from_path(segment)?;
        Ok(Self::new(storage, category))
    }

    pub fn category(&self) -> Category {
        self.view.category()
    }

    pub fn view(&self) -> &CategoryView {
        &self.view
    }

    /// Reload the collection and show `category` from its first record.
    pub fn open(&mut self, category: Category) {
        let collection = self.repo.load();
        self.view.switch_category(&collection, category);
        tracing::debug!(%category, count = self.view.len(), "Opened exhibition page");
    }

    /// Re-open the current category.
    pub fn refresh(&mut self) {
        self.open(self.view.category());
    }

    /// Select the tab at `position` of the filtered list.
    pub fn select(&mut self, position: usize) -> SiteResult<()> {
        Ok(self.view.select(position)?)
    }

    pub fn tabs(&self) -> Vec<Tab<'_>> {
        self.view.tabs()
    }

    /// The selected exhibition, or `None` when the category is empty.
    pub fn showcase(&self) -> Option<Showcase<'_>> {
        match self.view.active() {
            ActiveExhibition::Showing { entry, .. } => Some(Showcase::of(entry.index, &entry.record)),
            ActiveExhibition::Empty { .. } => None,
        }
    }

    /// Text shown in place of the gallery when there is nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self.view.active() {
            ActiveExhibition::Empty { .. } => Some(EMPTY_CATEGORY_MESSAGE),
            ActiveExhibition::Showing { .. } => None,
        }
    }
}
