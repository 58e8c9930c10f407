//! Raw search form state and the filter-panel visibility machine

/// Identifies a single form input. Used by validation errors to point the
/// adapter at the field the user has to fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    BusinessName,
    Location,
    EnableFilters,
    MinReviews,
    MinRatings,
    StartParam,
}

impl FormField {
    /// Human-readable label, used in prompts and validation messages
    pub fn label(&self) -> &'static str {
        match self {
            FormField::BusinessName => "Business types",
            FormField::Location => "Location",
            FormField::EnableFilters => "Enable filters",
            FormField::MinReviews => "Minimum Reviews",
            FormField::MinRatings => "Minimum Rating",
            FormField::StartParam => "Start",
        }
    }

    /// The `submit` subcommand flag that sets this field
    pub fn flag(&self) -> &'static str {
        match self {
            FormField::BusinessName => "--business-name",
            FormField::Location => "--location",
            FormField::EnableFilters => "--enable-filters",
            FormField::MinReviews => "--min-reviews",
            FormField::MinRatings => "--min-ratings",
            FormField::StartParam => "--start",
        }
    }
}

/// Visibility of the optional filter inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVisibility {
    Hidden,
    Visible,
}

/// Two-state machine driven solely by the enable-filters checkbox.
/// Visible filters are mandatory for submission; hidden filters are
/// optional and keep whatever values they held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    visibility: FilterVisibility,
}

impl FilterPanel {
    fn new(checkbox_checked: bool) -> Self {
        let mut panel = Self {
            visibility: FilterVisibility::Hidden,
        };
        panel.sync(checkbox_checked);
        panel
    }

    /// Re-derive visibility from the checkbox state. Values in the filter
    /// inputs are retained either way, never cleared.
    fn sync(&mut self, checkbox_checked: bool) {
        self.visibility = if checkbox_checked {
            FilterVisibility::Visible
        } else {
            FilterVisibility::Hidden
        };
    }

    pub fn visibility(&self) -> FilterVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == FilterVisibility::Visible
    }

    /// Visible filter inputs must be filled in before submission
    pub fn filters_required(&self) -> bool {
        self.is_visible()
    }
}

/// Raw form values as typed by the user. Parsing happens in validation,
/// not here, so invalid text survives long enough to produce a message
/// naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    business_name: String,
    location: String,
    enable_filters: bool,
    min_reviews: String,
    min_ratings: String,
    start: String,
    panel: FilterPanel,
}

impl SearchForm {
    pub const DEFAULT_START: &'static str = "0";

    /// Fresh form with default values. The filter panel is synced once at
    /// construction so it agrees with the default checkbox state.
    pub fn new() -> Self {
        Self {
            business_name: String::new(),
            location: String::new(),
            enable_filters: false,
            min_reviews: String::new(),
            min_ratings: String::new(),
            start: Self::DEFAULT_START.to_string(),
            panel: FilterPanel::new(false),
        }
    }

    /// Restore defaults and re-sync the filter panel, as after a
    /// successful submission
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::BusinessName => &self.business_name,
            FormField::Location => &self.location,
            FormField::EnableFilters => {
                if self.enable_filters {
                    "true"
                } else {
                    "false"
                }
            }
            FormField::MinReviews => &self.min_reviews,
            FormField::MinRatings => &self.min_ratings,
            FormField::StartParam => &self.start,
        }
    }

    /// Set a text field. The checkbox goes through `set_filters_enabled`
    /// so the panel stays in sync.
    pub fn set_value(&mut self, field: FormField, value: String) {
        match field {
            FormField::BusinessName => self.business_name = value,
            FormField::Location => self.location = value,
            FormField::EnableFilters => self.set_filters_enabled(value.trim() == "true"),
            FormField::MinReviews => self.min_reviews = value,
            FormField::MinRatings => self.min_ratings = value,
            FormField::StartParam => self.start = value,
        }
    }

    /// Flip the checkbox and run the visibility toggle
    pub fn set_filters_enabled(&mut self, enabled: bool) {
        self.enable_filters = enabled;
        self.panel.sync(enabled);
    }

    pub fn filters_enabled(&self) -> bool {
        self.enable_filters
    }

    pub fn filter_panel(&self) -> &FilterPanel {
        &self.panel
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn min_reviews(&self) -> &str {
        &self.min_reviews
    }

    pub fn min_ratings(&self) -> &str {
        &self.min_ratings
    }

    pub fn start(&self) -> &str {
        &self.start
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}
