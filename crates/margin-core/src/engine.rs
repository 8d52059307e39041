use crate::config::EngineConfig;
use crate::constants::*;
use crate::draw::TextDraw;
use crate::geometry::Geometry;
use crate::hover;
use crate::pools::pool_for;
use crate::popup::PopupField;
use crate::rain::{scroll_speed_factor, RainField};
use crate::section::Section;
use crate::tension::TensionLines;
use rand::prelude::*;

/// Inputs the page feeds into the engine between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Debounced viewport resize: rebuild every layer.
    Resize {
        geometry: Geometry,
        row_midpoints: Vec<f32>,
    },
    Scroll {
        scroll_y: f32,
        section: Section,
        row_midpoints: Vec<f32>,
    },
    PointerEnter {
        row: usize,
    },
    PointerLeave {
        row: usize,
    },
    /// Fixed-period scroll velocity decay, independent of the frame loop.
    VelocityDecay,
}

/// Owns all margin animation state. Event handlers only set targets and
/// flags; `tick` is the single place physics advances.
pub struct MarginEngine {
    pub config: EngineConfig,
    geometry: Geometry,
    section: Section,
    scroll_velocity: f32,
    last_scroll_y: f32,
    hovering: bool,
    rain: RainField,
    popups: PopupField,
    lines: TensionLines,
    rng: StdRng,
}

impl MarginEngine {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            geometry: Geometry::default(),
            section: Section::default(),
            scroll_velocity: 0.0,
            last_scroll_y: 0.0,
            hovering: false,
            rain: RainField::default(),
            popups: PopupField::default(),
            lines: TensionLines::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// First build once layout is measurable.
    pub fn start(
        &mut self,
        geometry: Geometry,
        section: Section,
        scroll_y: f32,
        row_midpoints: &[f32],
    ) {
        self.geometry = geometry;
        self.section = section;
        self.last_scroll_y = scroll_y;
        self.rebuild(row_midpoints);
        self.burst_popups(POPUP_INITIAL_BURST);
        log::info!(
            "[engine] started: section={} columns={} lines={} popups={}",
            section.name(),
            self.rain.columns().len(),
            self.lines.len(),
            self.popups.len()
        );
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Resize {
                geometry,
                row_midpoints,
            } => {
                self.geometry = geometry;
                self.rebuild(&row_midpoints);
            }
            Event::Scroll {
                scroll_y,
                section,
                row_midpoints,
            } => self.on_scroll(scroll_y, section, &row_midpoints),
            Event::PointerEnter { row } => self.on_pointer_enter(row),
            Event::PointerLeave { row } => self.on_pointer_leave(row),
            Event::VelocityDecay => self.scroll_velocity *= SCROLL_VELOCITY_DECAY,
        }
    }

    /// One display frame: rain, then popups, then lines. Canvas draws are
    /// written to `out`; line paths are read back through `lines()`.
    pub fn tick(&mut self, out: &mut Vec<TextDraw>) {
        out.clear();
        let pool = pool_for(self.section);
        if self.geometry.margin_width() >= self.config.min_margin_columns {
            let speed = scroll_speed_factor(self.scroll_velocity);
            self.rain.step(
                &self.geometry,
                pool,
                speed,
                &self.config.rain_fade,
                &mut self.rng,
                out,
            );
        }
        self.popups.maybe_spawn(
            &self.geometry,
            pool,
            self.hovering,
            self.config.min_margin_popups,
            self.config.max_popups,
            &mut self.rng,
        );
        self.popups.step(out);
        self.lines.step(&self.config.spring);
    }

    fn rebuild(&mut self, row_midpoints: &[f32]) {
        self.rain
            .build(&self.geometry, self.config.min_margin_columns, &mut self.rng);
        self.lines
            .build(&self.geometry, row_midpoints, self.config.min_margin_lines);
        self.popups.clear();
    }

    fn on_scroll(&mut self, scroll_y: f32, section: Section, row_midpoints: &[f32]) {
        self.scroll_velocity = scroll_y - self.last_scroll_y;
        self.last_scroll_y = scroll_y;

        let expected = if self.geometry.margin_width() >= self.config.min_margin_lines {
            row_midpoints.len()
        } else {
            0
        };
        if expected != self.lines.len() {
            self.lines
                .build(&self.geometry, row_midpoints, self.config.min_margin_lines);
        } else {
            self.lines.resync(row_midpoints);
        }

        if section != self.section {
            self.on_section_change(section);
        }
    }

    fn on_section_change(&mut self, section: Section) {
        log::info!(
            "[engine] section {} -> {}",
            self.section.name(),
            section.name()
        );
        self.section = section;
        self.popups.clear();
        let (lo, hi) = POPUP_SECTION_BURST;
        let burst = self.rng.gen_range(lo..=hi);
        self.burst_popups(burst);
    }

    fn on_pointer_enter(&mut self, row: usize) {
        self.hovering = true;
        self.rain.excite(HOVER_EXCITE_CHANCE, &mut self.rng);
        let (lo, hi) = POPUP_HOVER_BURST;
        let burst = self.rng.gen_range(lo..=hi);
        self.burst_popups(burst);
        hover::spike_row(&mut self.lines, row, &mut self.rng);
    }

    fn on_pointer_leave(&mut self, _row: usize) {
        self.hovering = false;
        self.rain.calm();
        hover::release(&mut self.lines);
    }

    fn burst_popups(&mut self, count: usize) {
        self.popups.burst(
            count,
            &self.geometry,
            pool_for(self.section),
            self.config.min_margin_popups,
            self.config.max_popups,
            &mut self.rng,
        );
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn scroll_velocity(&self) -> f32 {
        self.scroll_velocity
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn rain(&self) -> &RainField {
        &self.rain
    }

    pub fn popups(&self) -> &PopupField {
        &self.popups
    }

    pub fn lines(&self) -> &TensionLines {
        &self.lines
    }
}
