//! Activity Card Renderer
//!
//! Builds one card per activity and owns every in-place patch applied to a
//! card afterwards: counter rewrites, row insertion/removal and the
//! empty-state toggle.
//!
//! Card layout:
//!
//! ```text
//! div.activity-card
//!   h4                        name
//!   p                         description
//!   p  strong "Schedule: "    span.schedule
//!   p  strong "Availability: " span.spots-left   "{n} spots left"
//!   div.participants-section
//!     div.participants-title  "Participants"
//!     div.participants-empty  | ul.participants-list > li*
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::Activity;
use crate::surface::RenderSurface;

/// Text of the empty-state node
pub const EMPTY_STATE_TEXT: &str = "No participants yet";

/// Label of the leading, valueless selection option
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

const REMOVE_GLYPH: &str = "✕";
const REMOVE_TOOLTIP: &str = "Unregister participant";

/// Which node currently fills a card's participants region.
/// Exactly one of the two is attached at any time.
#[derive(Clone, Debug, PartialEq)]
pub enum Region<N> {
    Empty(N),
    List(N),
}

/// Handles into one rendered card
#[derive(Debug)]
pub struct CardHandle<N> {
    name: String,
    root: N,
    counter: N,
    section: N,
    region: RefCell<Region<N>>,
}

impl<N: Clone> CardHandle<N> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    /// Node holding `"{n} spots left"`
    pub fn counter(&self) -> &N {
        &self.counter
    }

    pub fn section(&self) -> &N {
        &self.section
    }

    pub fn region(&self) -> Region<N> {
        self.region.borrow().clone()
    }
}

/// One participant row and its removal control
#[derive(Clone, Debug, PartialEq)]
pub struct RowHandle<N> {
    pub participant: String,
    pub row: N,
    pub control: N,
}

/// A freshly rendered card with the rows that still need wiring
pub struct RenderedCard<N> {
    pub card: Rc<CardHandle<N>>,
    pub rows: Vec<RowHandle<N>>,
}

/// Activity name to card, built at render time
pub struct CardIndex<N> {
    cards: RefCell<HashMap<String, Rc<CardHandle<N>>>>,
}

impl<N> Default for CardIndex<N> {
    fn default() -> Self {
        Self {
            cards: RefCell::new(HashMap::new()),
        }
    }
}

impl<N> CardIndex<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, card: Rc<CardHandle<N>>) {
        self.cards.borrow_mut().insert(card.name.clone(), card);
    }

    pub fn get(&self, name: &str) -> Option<Rc<CardHandle<N>>> {
        self.cards.borrow().get(name).cloned()
    }

    pub fn clear(&self) {
        self.cards.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.cards.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.borrow().is_empty()
    }
}

/// Read the first integer out of a counter text such as `"9 spots left"`
pub fn parse_spots(text: &str) -> Option<i64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..].chars().take_while(char::is_ascii_digit).collect();
    let value: i64 = digits.parse().ok()?;
    if text[..start].ends_with('-') {
        Some(-value)
    } else {
        Some(value)
    }
}

pub fn format_spots(spots: i64) -> String {
    format!("{} spots left", spots)
}

/// Builds and patches activity cards on a render surface
pub struct ActivityCardRenderer<S: RenderSurface> {
    surface: Rc<S>,
    select: S::Node,
}

impl<S: RenderSurface> ActivityCardRenderer<S> {
    /// `select` is the shared selection control that gains one option per card
    pub fn new(surface: Rc<S>, select: S::Node) -> Self {
        Self { surface, select }
    }

    pub fn surface(&self) -> &Rc<S> {
        &self.surface
    }

    /// Empty the selection control down to its placeholder
    pub fn reset_select(&self) {
        self.surface.clear(&self.select);
        self.add_option("", SELECT_PLACEHOLDER);
    }

    fn add_option(&self, value: &str, label: &str) {
        let option = self.surface.create("option", "");
        self.surface.set_attribute(&option, "value", value);
        self.surface.set_text(&option, label);
        self.surface.append(&self.select, &option);
    }

    fn element(&self, tag: &str, class: &str, text: &str) -> S::Node {
        let node = self.surface.create(tag, class);
        self.surface.set_text(&node, text);
        node
    }

    /// `p > strong(label) + span.class(value)`; returns (line, value span)
    fn labelled_line(&self, label: &str, class: &str, value: &str) -> (S::Node, S::Node) {
        let line = self.surface.create("p", "");
        let value_node = self.element("span", class, value);
        self.surface.append(&line, &self.element("strong", "", label));
        self.surface.append(&line, &value_node);
        (line, value_node)
    }

    /// Build the card for `activity` and register its selection option.
    /// The card is returned detached; the caller attaches it.
    pub fn render(&self, activity: &Activity) -> RenderedCard<S::Node> {
        let s = &*self.surface;

        let root = s.create("div", "activity-card");
        s.append(&root, &self.element("h4", "", &activity.name));
        s.append(&root, &self.element("p", "", &activity.description));

        let (schedule, _) = self.labelled_line("Schedule: ", "schedule", &activity.schedule);
        s.append(&root, &schedule);

        let (availability, counter) =
            self.labelled_line("Availability: ", "spots-left", &format_spots(activity.spots_left()));
        s.append(&root, &availability);

        let section = s.create("div", "participants-section");
        s.append(&section, &self.element("div", "participants-title", "Participants"));

        let mut rows = Vec::with_capacity(activity.participants.len());
        let region = if activity.participants.is_empty() {
            let empty = self.empty_state();
            s.append(&section, &empty);
            Region::Empty(empty)
        } else {
            let list = s.create("ul", "participants-list");
            for participant in &activity.participants {
                let row = self.build_row(participant);
                s.append(&list, &row.row);
                rows.push(row);
            }
            s.append(&section, &list);
            Region::List(list)
        };
        s.append(&root, &section);

        self.add_option(&activity.name, &activity.name);

        RenderedCard {
            card: Rc::new(CardHandle {
                name: activity.name.clone(),
                root,
                counter,
                section,
                region: RefCell::new(region),
            }),
            rows,
        }
    }

    fn empty_state(&self) -> S::Node {
        self.element("div", "participants-empty", EMPTY_STATE_TEXT)
    }

    fn build_row(&self, participant: &str) -> RowHandle<S::Node> {
        let s = &*self.surface;
        let row = s.create("li", "");
        let control = self.element("span", "delete-icon", REMOVE_GLYPH);
        s.set_attribute(&control, "title", REMOVE_TOOLTIP);
        s.append(&row, &self.element("span", "participant-badge", participant));
        s.append(&row, &control);

        RowHandle {
            participant: participant.to_string(),
            row,
            control,
        }
    }

    /// Append a row for `participant` as the last row of the card, swapping
    /// the empty-state node for a fresh list first when needed.
    pub fn append_row(&self, card: &CardHandle<S::Node>, participant: &str) -> RowHandle<S::Node> {
        let list = {
            let mut region = card.region.borrow_mut();
            match &*region {
                Region::List(list) => list.clone(),
                Region::Empty(empty) => {
                    let list = self.surface.create("ul", "participants-list");
                    self.surface.replace(&card.section, &list, empty);
                    *region = Region::List(list.clone());
                    list
                }
            }
        };

        let row = self.build_row(participant);
        self.surface.append(&list, &row.row);
        row
    }

    /// Detach `row`. When the live list is left without rows, swap it for
    /// the empty-state node.
    pub fn remove_row(&self, card: &CardHandle<S::Node>, row: &RowHandle<S::Node>) {
        self.surface.remove(&row.row);

        let mut region = card.region.borrow_mut();
        if let Region::List(list) = &*region {
            if self.surface.child_count(list) == 0 {
                let empty = self.empty_state();
                self.surface.replace(&card.section, &empty, list);
                *region = Region::Empty(empty);
            }
        }
    }

    /// Shift the displayed availability by `delta`, reading the current
    /// value off the counter text. Returns the new value, or `None` when the
    /// counter text holds no number (the counter is then left untouched).
    pub fn adjust_spots(&self, card: &CardHandle<S::Node>, delta: i64) -> Option<i64> {
        let text = self.surface.text(&card.counter);
        let Some(current) = parse_spots(&text) else {
            tracing::warn!(activity = %card.name, counter = %text, "Unreadable availability counter");
            return None;
        };

        let updated = current + delta;
        self.surface.set_text(&card.counter, &format_spots(updated));
        Some(updated)
    }
}
