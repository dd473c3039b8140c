//! Document model and line layout
//!
//! A document is a title plus a list of sections. Layout flattens it
//! into terminal rows at a given width; each section heading produces an
//! anchor row that scroll animations can target.

use unicode_width::UnicodeWidthStr;

/// A heading followed by prose paragraphs.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub title: String,
    pub sections: Vec<Section>,
}

/// One laid-out terminal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Blank,
    Title(String),
    /// Section heading with its section index.
    Heading(usize, String),
    Text(String),
}

/// A jump target: the row a section heading landed on.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub section: usize,
    pub heading: String,
    pub row: usize,
}

/// The document flattened to rows at a fixed width.
#[derive(Debug, Clone, Default)]
pub struct DocumentLayout {
    pub rows: Vec<Row>,
    pub anchors: Vec<Anchor>,
}

impl DocumentLayout {
    /// Total scrollable height in rows.
    pub fn height(&self) -> f64 {
        self.rows.len() as f64
    }
}

impl Document {
    /// Flatten the document into rows wrapped to `width` columns.
    pub fn layout(&self, width: u16) -> DocumentLayout {
        let width = width.max(1) as usize;
        let mut rows = Vec::new();
        let mut anchors = Vec::new();

        rows.push(Row::Title(self.title.clone()));
        rows.push(Row::Blank);

        for (index, section) in self.sections.iter().enumerate() {
            anchors.push(Anchor {
                section: index,
                heading: section.heading.clone(),
                row: rows.len(),
            });
            rows.push(Row::Heading(index, section.heading.clone()));
            rows.push(Row::Blank);

            for paragraph in &section.paragraphs {
                for line in wrap(paragraph, width) {
                    rows.push(Row::Text(line));
                }
                rows.push(Row::Blank);
            }
        }

        DocumentLayout { rows, anchors }
    }

    /// The built-in demo document shown by `scrollkit run`.
    pub fn sample() -> Self {
        let section = |heading: &str, paragraphs: &[&str]| Section {
            heading: heading.to_string(),
            paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
        };

        Self {
            title: "Scrollkit".to_string(),
            sections: vec![
                section(
                    "Overview",
                    &[
                        "Scrollkit animates scroll position changes instead of jumping. \
                         When you pick a section from the outline on the left, the view \
                         glides to its heading over a configurable duration, following a \
                         configurable easing curve.",
                        "Everything you see here runs through the same driver a host \
                         application would use: the viewport implements the surface and \
                         scheduler capabilities, and each jump queues one animation that \
                         is stepped once per frame.",
                    ],
                ),
                section(
                    "Getting around",
                    &[
                        "Use j and k (or the arrow keys) to move the selection in the \
                         outline, and press Enter to scroll to the selected section. \
                         Press gg to glide back to the top of the document and G to \
                         glide to the bottom.",
                        "Press e to cycle through the named easing curves; the status \
                         bar shows which curve the next jump will use. Press q to quit.",
                    ],
                ),
                section(
                    "Easing curves",
                    &[
                        "Thirteen named curves are available: linear, plus the quad, \
                         cubic, quart, and quint families, each in ease-in, ease-out, \
                         and ease-in-out phases. Ease-in curves start slowly and \
                         accelerate, ease-out curves decelerate into the target, and \
                         ease-in-out curves do both with a fast middle.",
                        "Higher polynomial orders exaggerate the effect: quint curves \
                         spend far more of their duration near the endpoints than quad \
                         curves do. Linear motion covers equal distance in equal time \
                         and tends to look mechanical; it is mostly useful as a \
                         reference.",
                        "The curve names are stable configuration values. A name the \
                         library does not recognize is not an error: it falls back to \
                         linear and the scroll still happens.",
                    ],
                ),
                section(
                    "Durations",
                    &[
                        "The default duration is half a second, which reads as quick \
                         but deliberate at typical terminal sizes. Longer durations \
                         make the easing curve easier to see; shorter ones approach an \
                         instant jump.",
                        "A duration of zero is allowed and degrades gracefully: the \
                         very first frame computes full progress and lands directly on \
                         the target, and no further frames run.",
                    ],
                ),
                section(
                    "Targets and offsets",
                    &[
                        "A jump targets an element's top edge as measured from the \
                         current viewport, so the same code works no matter where the \
                         view currently sits. The configured offset is subtracted from \
                         that edge before the target is computed, which is how you \
                         leave room for a fixed header above the content.",
                    ],
                ),
                section(
                    "Boundary behavior",
                    &[
                        "A target near the end of the document cannot be scrolled to \
                         the top of the viewport; there is not enough content below it. \
                         When less than one viewport of content remains under a target, \
                         the driver clamps the jump to the maximum scroll offset, so \
                         the view settles exactly at the bottom instead of overshooting \
                         into empty space.",
                        "Try it: jump to the last section of this document and watch \
                         the status bar. The reported target is the bottom of the \
                         document, not the heading row itself.",
                    ],
                ),
                section(
                    "Concurrent animations",
                    &[
                        "Starting a new jump while one is in flight does not cancel \
                         the old one. Both animations step once per frame, in the order \
                         they were queued, and the later write wins each frame. The \
                         result is a superposition that ends wherever the last-queued \
                         animation ends.",
                        "If you mash Enter across different sections you can see this: \
                         the motion stays continuous and always settles on the most \
                         recent target.",
                    ],
                ),
                section(
                    "Configuration",
                    &[
                        "Scrollkit reads ~/.config/scrollkit/config.toml at startup. \
                         The scroll section sets duration_ms, offset, and easing; the \
                         ui section sets the idle tick rate and the frame rate used \
                         while an animation is running.",
                        "Every field is optional and falls back to its default, so an \
                         empty or missing file is fine.",
                    ],
                ),
                section(
                    "Terminal notes",
                    &[
                        "Scroll offsets are kept as fractional rows internally and \
                         rounded only at render time. At terminal cell granularity the \
                         eased motion is necessarily chunky for short distances; it \
                         reads much smoother on jumps of a page or more, which is \
                         exactly where animated scrolling earns its keep.",
                        "The frame rate while animating is capped by the configured \
                         animation fps. Sixty frames per second is plenty; most of the \
                         smoothness comes from the easing, not the frame count.",
                    ],
                ),
            ],
        }
    }
}

/// Greedy word wrap using display width, not byte length.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width == 0 {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_section_doc() -> Document {
        Document {
            title: "Test".to_string(),
            sections: vec![
                Section {
                    heading: "First".to_string(),
                    paragraphs: vec!["one two three four five six".to_string()],
                },
                Section {
                    heading: "Second".to_string(),
                    paragraphs: vec!["seven eight".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("alpha beta gamma delta", 11);
        assert_eq!(lines, vec!["alpha beta", "gamma delta"]);
        for line in &lines {
            assert!(line.width() <= 11);
        }
    }

    #[test]
    fn test_wrap_long_word_gets_own_line() {
        let lines = wrap("hi incomprehensibilities yo", 5);
        assert_eq!(lines, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn test_layout_anchors_point_at_headings() {
        let layout = two_section_doc().layout(40);
        assert_eq!(layout.anchors.len(), 2);
        for anchor in &layout.anchors {
            match &layout.rows[anchor.row] {
                Row::Heading(section, text) => {
                    assert_eq!(*section, anchor.section);
                    assert_eq!(*text, anchor.heading);
                }
                other => panic!("anchor row is {:?}, not a heading", other),
            }
        }
    }

    #[test]
    fn test_layout_height_matches_rows() {
        let layout = two_section_doc().layout(40);
        assert_eq!(layout.height(), layout.rows.len() as f64);
    }

    #[test]
    fn test_narrower_width_produces_more_rows() {
        let doc = two_section_doc();
        let wide = doc.layout(80);
        let narrow = doc.layout(10);
        assert!(narrow.rows.len() > wide.rows.len());
    }

    #[test]
    fn test_sample_document_has_jump_targets() {
        let layout = Document::sample().layout(60);
        assert!(layout.anchors.len() >= 5);
        // Enough content to scroll in a typical terminal.
        assert!(layout.rows.len() > 50);
    }
}
