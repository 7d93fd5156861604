//! Ordered landing sections and the scroll-spy lookup over their layout.

/// Layout span of one section inside the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    /// Background colour as `#rrggbb`.
    pub background: String,
}

impl Section {
    pub fn new(id: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            background: background.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    bounds: Option<Vec<SectionBounds>>,
    spy_fraction: f32,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>, spy_fraction: f32) -> Self {
        Self {
            sections,
            bounds: None,
            spy_fraction: if spy_fraction.is_finite() {
                spy_fraction.clamp(0.0, 1.0)
            } else {
                1.0 / 3.0
            },
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn id_of(&self, index: usize) -> Option<&str> {
        self.sections.get(index).map(|section| section.id.as_str())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn is_measured(&self) -> bool {
        self.bounds.is_some()
    }

    /// Lay every section out as one full viewport, stacked in order.
    pub fn measure_uniform(&mut self, viewport_height: f32) {
        if !viewport_height.is_finite() || viewport_height <= 0.0 {
            self.bounds = None;
            return;
        }
        self.bounds = Some(
            (0..self.sections.len())
                .map(|idx| SectionBounds {
                    top: idx as f32 * viewport_height,
                    height: viewport_height,
                })
                .collect(),
        );
    }

    /// Install explicit bounds; ignored unless there is one span per section.
    pub fn set_bounds(&mut self, bounds: Vec<SectionBounds>) {
        if bounds.len() == self.sections.len() {
            self.bounds = Some(bounds);
        } else {
            tracing::warn!(
                expected = self.sections.len(),
                got = bounds.len(),
                "Ignoring section bounds with mismatched length"
            );
        }
    }

    pub fn bounds_of(&self, index: usize) -> Option<SectionBounds> {
        self.bounds.as_ref()?.get(index).copied()
    }

    /// Scroll offset that brings `index` to the top of the viewport.
    pub fn offset_of(&self, index: usize) -> Option<f32> {
        self.bounds_of(index).map(|bounds| bounds.top)
    }

    /// Section whose span contains the probe line a fraction of the viewport
    /// below `scroll_top`.
    pub fn current_section_at(&self, scroll_top: f32, viewport_height: f32) -> Option<usize> {
        let bounds = self.bounds.as_ref()?;
        if !scroll_top.is_finite() || !viewport_height.is_finite() {
            return None;
        }
        let probe = scroll_top + viewport_height * self.spy_fraction;
        bounds.iter().position(|span| span.contains(probe))
    }
}
