use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCategory {
    Workshops,
    Seminars,
    Conventions,
    IndustrialVisits,
    StudentActivities,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 5] = [
        GalleryCategory::Workshops,
        GalleryCategory::Seminars,
        GalleryCategory::Conventions,
        GalleryCategory::IndustrialVisits,
        GalleryCategory::StudentActivities,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Workshops => "Workshops",
            GalleryCategory::Seminars => "Seminars",
            GalleryCategory::Conventions => "Conventions",
            GalleryCategory::IndustrialVisits => "Industrial Visits",
            GalleryCategory::StudentActivities => "Student Activities",
        }
    }
}

/// Active filter: everything, or one category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

impl CategoryFilter {
    /// "All" first, then each category in display order.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(GalleryCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, category: GalleryCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: u32,
    pub category: GalleryCategory,
    pub name: &'static str,
    pub location: &'static str,
    pub year: &'static str,
    pub image: &'static str,
}

const PLACEHOLDER: &str = "/assets/placeholder.svg";

pub static GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage { id: 1, category: GalleryCategory::Workshops, name: "Machine Learning Workshop", location: "New Delhi", year: "2024", image: PLACEHOLDER },
    GalleryImage { id: 2, category: GalleryCategory::Seminars, name: "Sustainable Engineering Seminar", location: "Mumbai", year: "2024", image: PLACEHOLDER },
    GalleryImage { id: 3, category: GalleryCategory::Conventions, name: "Annual Engineering Convention", location: "Bangalore", year: "2023", image: PLACEHOLDER },
    GalleryImage { id: 4, category: GalleryCategory::IndustrialVisits, name: "Tech Industry Tour", location: "Hyderabad", year: "2023", image: PLACEHOLDER },
    GalleryImage { id: 5, category: GalleryCategory::StudentActivities, name: "Robotics Competition", location: "Chennai", year: "2023", image: PLACEHOLDER },
    GalleryImage { id: 6, category: GalleryCategory::Workshops, name: "IoT Development Workshop", location: "Pune", year: "2023", image: PLACEHOLDER },
    GalleryImage { id: 7, category: GalleryCategory::Seminars, name: "AI in Engineering Seminar", location: "Kolkata", year: "2023", image: PLACEHOLDER },
    GalleryImage { id: 8, category: GalleryCategory::Conventions, name: "Engineering Excellence Summit", location: "Ahmedabad", year: "2022", image: PLACEHOLDER },
    GalleryImage { id: 9, category: GalleryCategory::IndustrialVisits, name: "Manufacturing Plant Visit", location: "Jaipur", year: "2022", image: PLACEHOLDER },
    GalleryImage { id: 10, category: GalleryCategory::StudentActivities, name: "Hackathon 2022", location: "Delhi", year: "2022", image: PLACEHOLDER },
    GalleryImage { id: 11, category: GalleryCategory::Workshops, name: "Embedded Systems Workshop", location: "Bangalore", year: "2022", image: PLACEHOLDER },
    GalleryImage { id: 12, category: GalleryCategory::Seminars, name: "Future of Engineering", location: "Mumbai", year: "2022", image: PLACEHOLDER },
];

pub fn filter_images(images: &'static [GalleryImage], filter: CategoryFilter) -> Vec<&'static GalleryImage> {
    images.iter().filter(|image| filter.matches(image.category)).collect()
}

/// Keys the lightbox reacts to while it is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            "Escape" => Some(LightboxKey::Escape),
            _ => None,
        }
    }
}

pub enum LightboxAction {
    SelectCategory(CategoryFilter),
    Open(u32),
    Close,
    Previous,
    Next,
    Key(LightboxKey),
}

/// Category filter plus lightbox selection over a static image list.
///
/// The current position is never stored; `current_index` searches the
/// filtered list each time, so a category change that drops the open image
/// simply leaves the selection unmatched. Previous and next then wrap to the
/// last and first image respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxState {
    images: &'static [GalleryImage],
    pub category: CategoryFilter,
    pub open_image_id: Option<u32>,
    pub is_open: bool,
}

impl Default for LightboxState {
    fn default() -> Self {
        Self::new(GALLERY_IMAGES)
    }
}

impl LightboxState {
    pub fn new(images: &'static [GalleryImage]) -> Self {
        Self {
            images,
            category: CategoryFilter::All,
            open_image_id: None,
            is_open: false,
        }
    }

    pub fn filtered(&self) -> Vec<&'static GalleryImage> {
        filter_images(self.images, self.category)
    }

    /// Linear search of the filtered list for the open image.
    pub fn current_index(&self) -> Option<usize> {
        let id = self.open_image_id?;
        self.filtered().iter().position(|image| image.id == id)
    }

    pub fn current_image(&self) -> Option<&'static GalleryImage> {
        let id = self.open_image_id?;
        self.filtered().into_iter().find(|image| image.id == id)
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn open(&mut self, image_id: u32) {
        self.open_image_id = Some(image_id);
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn previous(&mut self) {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return;
        }
        let target = match self.current_index() {
            Some(index) if index > 0 => index - 1,
            _ => filtered.len() - 1,
        };
        self.open_image_id = Some(filtered[target].id);
    }

    pub fn next(&mut self) {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return;
        }
        let target = match self.current_index() {
            Some(index) if index + 1 < filtered.len() => index + 1,
            _ => 0,
        };
        self.open_image_id = Some(filtered[target].id);
    }

    /// Whether the keyboard should drive the lightbox. Independent of the
    /// open image still matching the current filter.
    pub fn listens_for_keys(&self) -> bool {
        self.is_open
    }

    /// Keys only act while the lightbox is open.
    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.is_open {
            return;
        }
        match key {
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Escape => self.close(),
        }
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::SelectCategory(category) => self.select_category(category),
            LightboxAction::Open(id) => self.open(id),
            LightboxAction::Close => self.close(),
            LightboxAction::Previous => self.previous(),
            LightboxAction::Next => self.next(),
            LightboxAction::Key(key) => self.handle_key(key),
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn image(id: u32, category: GalleryCategory) -> GalleryImage {
        GalleryImage { id, category, name: "", location: "", year: "", image: "" }
    }

    static THREE: &[GalleryImage] = &[
        image(1, GalleryCategory::Workshops),
        image(2, GalleryCategory::Workshops),
        image(3, GalleryCategory::Workshops),
    ];

    static MIXED: &[GalleryImage] = &[
        image(1, GalleryCategory::Workshops),
        image(2, GalleryCategory::Seminars),
        image(3, GalleryCategory::Workshops),
        image(4, GalleryCategory::Conventions),
    ];

    static EMPTY: &[GalleryImage] = &[];

    fn ids(images: &[&GalleryImage]) -> Vec<u32> {
        images.iter().map(|image| image.id).collect()
    }

    #[test]
    fn filter_matches_category_or_all() {
        for filter in CategoryFilter::choices() {
            let filtered = filter_images(GALLERY_IMAGES, filter);
            assert!(filtered.iter().all(|image| filter.matches(image.category)));
            let expected = GALLERY_IMAGES.iter().filter(|image| filter.matches(image.category)).count();
            assert_eq!(filtered.len(), expected);
        }
        assert_eq!(filter_images(GALLERY_IMAGES, CategoryFilter::All).len(), GALLERY_IMAGES.len());
        assert_eq!(
            ids(&filter_images(MIXED, CategoryFilter::Only(GalleryCategory::Workshops))),
            vec![1, 3]
        );
    }

    #[test]
    fn choices_start_with_all() {
        let labels: Vec<_> = CategoryFilter::choices().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Workshops", "Seminars", "Conventions", "Industrial Visits", "Student Activities"]
        );
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut state = LightboxState::new(THREE);
        state.open(1);
        assert_eq!(state.current_index(), Some(0));
        state.previous();
        assert_eq!(state.open_image_id, Some(3));
        state.previous();
        assert_eq!(state.open_image_id, Some(2));
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut state = LightboxState::new(THREE);
        state.open(3);
        state.next();
        assert_eq!(state.open_image_id, Some(1));
        state.next();
        assert_eq!(state.open_image_id, Some(2));
    }

    #[test]
    fn empty_list_navigation_is_a_no_op() {
        let mut state = LightboxState::new(EMPTY);
        state.open(9);
        state.previous();
        state.next();
        assert_eq!(state.open_image_id, Some(9));
        assert_eq!(state.current_index(), None);
        assert!(state.current_image().is_none());
    }

    #[test]
    fn singleton_list_stays_on_its_only_image() {
        let mut state = LightboxState::new(MIXED);
        state.select_category(CategoryFilter::Only(GalleryCategory::Conventions));
        state.open(4);
        state.previous();
        assert_eq!(state.open_image_id, Some(4));
        state.next();
        assert_eq!(state.open_image_id, Some(4));
    }

    #[test]
    fn category_change_keeps_lightbox_open_and_rescopes_navigation() {
        let mut state = LightboxState::new(MIXED);
        state.open(2);
        state.select_category(CategoryFilter::Only(GalleryCategory::Workshops));
        assert!(state.is_open);
        assert_eq!(state.current_index(), None);
        assert!(state.current_image().is_none());

        let mut forward = state.clone();
        forward.next();
        assert_eq!(forward.open_image_id, Some(1));

        let mut backward = state;
        backward.previous();
        assert_eq!(backward.open_image_id, Some(3));
    }

    #[test]
    fn escape_closes_and_later_keys_do_nothing() {
        let mut state = LightboxState::new(THREE);
        state.open(2);
        state.handle_key(LightboxKey::ArrowRight);
        assert_eq!(state.open_image_id, Some(3));

        state.handle_key(LightboxKey::Escape);
        assert!(!state.is_open);

        state.handle_key(LightboxKey::ArrowLeft);
        assert_eq!(state.open_image_id, Some(3));
    }

    #[test]
    fn keys_still_navigate_when_open_image_is_filtered_out() {
        let mut state = LightboxState::new(MIXED);
        state.open(2);
        state.select_category(CategoryFilter::Only(GalleryCategory::Workshops));
        assert!(state.current_image().is_none());
        assert!(state.listens_for_keys());

        state.handle_key(LightboxKey::ArrowRight);
        assert_eq!(state.open_image_id, Some(1));
        assert_eq!(state.current_index(), Some(0));

        state.handle_key(LightboxKey::Escape);
        assert!(!state.listens_for_keys());
    }

    #[test]
    fn key_names_map_to_lightbox_keys() {
        assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::ArrowLeft));
        assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::ArrowRight));
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Escape));
        assert_eq!(LightboxKey::from_key("Enter"), None);
    }

    #[test]
    fn reducer_skips_unchanged_state() {
        let state = Rc::new(LightboxState::new(THREE));
        let same = state.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&state, &same));

        let opened = state.reduce(LightboxAction::Open(1));
        assert!(opened.is_open);
        assert_eq!(opened.current_image().map(|image| image.id), Some(1));
    }
}
