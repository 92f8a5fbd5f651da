//! Text loader for connection patterns.
//!
//! ## Format
//!
//! ```text
//! Pattern CB2
//! # Wedge into a one-point jump
//! ?X?
//! O*O
//! ?,?
//!
//! :B
//! ```
//!
//! Diagram symbols are relative to the matched color:
//!
//! | Symbol | Meaning                                   |
//! |--------|-------------------------------------------|
//! | `O`    | friendly stone                            |
//! | `X`    | opponent stone                            |
//! | `.`    | empty                                     |
//! | `o`/`x`| friendly / opponent stone, or empty       |
//! | `,`    | empty, closed to connections on a cut     |
//! | `*`    | empty key point (the cutting point)       |
//! | `?`    | anything                                  |
//!
//! The anchor is the first `O` in reading order. The class line holds the
//! letters `B` (cut), `C` (connect), `s` (suppress safety check), or `-` for
//! none; anything before a comma, such as a symmetry count `:8,B`, is
//! ignored.

use crate::core::{AnalysisError, Offset, Result, MAX_BOARD_SIZE};

use super::database::PatternDatabase;
use super::pattern::{ElementAttribute, Elements, Pattern, PatternClass, PatternElement};

const MOVE_SYMBOL: char = '*';
const ANY_SYMBOL: char = '?';

impl Pattern {
    /// Build a pattern from a diagram.
    ///
    /// Cut patterns get their inhibitor elements moved to the front,
    /// otherwise elements are in reading order.
    ///
    /// ```
    /// use go_connections::core::Offset;
    /// use go_connections::patterns::{ElementAttribute, Pattern, PatternClass};
    ///
    /// let pattern = Pattern::from_diagram("CB1", "XO\nO*", PatternClass::CUT).unwrap();
    ///
    /// // Anchored on the first O
    /// assert_eq!(pattern.elements[0].offset, Offset::new(0, -1));
    /// assert_eq!(pattern.elements[1].attribute, ElementAttribute::Friendly);
    /// assert_eq!(pattern.move_offset, Some(Offset::new(1, 0)));
    /// ```
    pub fn from_diagram(name: impl Into<String>, diagram: &str, class: PatternClass) -> Result<Self> {
        let rows: Vec<(usize, &str)> = diagram
            .lines()
            .enumerate()
            .map(|(n, line)| (n + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .collect();
        build(name.into(), &rows, class)
    }
}

fn build(name: String, rows: &[(usize, &str)], class: PatternClass) -> Result<Pattern> {
    if rows.len() > MAX_BOARD_SIZE as usize
        || rows.iter().any(|(_, row)| row.chars().count() > MAX_BOARD_SIZE as usize)
    {
        return Err(syntax(rows[0].0, format!("pattern {} is larger than the board", name)));
    }

    // (row, col, attribute) in reading order; the move is an empty element
    let mut cells = Vec::new();
    let mut move_cell = None;
    let mut anchor = None;

    for (row, &(line, text)) in rows.iter().enumerate() {
        for (col, ch) in text.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let attribute = match ch {
                ANY_SYMBOL => continue,
                MOVE_SYMBOL => {
                    if move_cell.replace((row, col)).is_some() {
                        return Err(AnalysisError::DuplicateMove(name));
                    }
                    ElementAttribute::Empty
                }
                other => ElementAttribute::from_symbol(other)
                    .ok_or(AnalysisError::UnexpectedChar { ch: other, line })?,
            };
            if attribute == ElementAttribute::Friendly && anchor.is_none() {
                anchor = Some((row, col));
            }
            cells.push((row, col, attribute));
        }
    }

    let Some((anchor_row, anchor_col)) = anchor else {
        return Err(AnalysisError::MissingAnchor(name));
    };
    let relative = |row: usize, col: usize| {
        Offset::new(
            row as i8 - anchor_row as i8,
            col as i8 - anchor_col as i8,
        )
    };

    let mut elements: Elements = cells
        .into_iter()
        .map(|(row, col, attribute)| PatternElement::new(relative(row, col), attribute))
        .collect();

    if class.is_cut() {
        if move_cell.is_none() {
            return Err(AnalysisError::MissingCutPoint(name));
        }
        elements.sort_by_key(|e| e.attribute != ElementAttribute::Inhibitor);
    }

    let mut pattern = Pattern::new(name, class);
    pattern.elements = elements;
    pattern.move_offset = move_cell.map(|(row, col)| relative(row, col));
    Ok(pattern)
}

fn syntax(line: usize, message: impl Into<String>) -> AnalysisError {
    AnalysisError::Syntax {
        line,
        message: message.into(),
    }
}

/// Parse the class line contents (after the colon).
fn parse_class(name: &str, flags: &str) -> Result<PatternClass> {
    let letters = flags.rsplit(',').next().unwrap_or(flags).trim();
    if letters == "-" {
        return Ok(PatternClass::NONE);
    }
    PatternClass::from_letters(letters).map_err(|flag| AnalysisError::UnknownClass {
        name: name.to_string(),
        flag,
    })
}

impl PatternDatabase {
    /// Load a database from its text form.
    ///
    /// Blank lines and `#` comments are ignored.
    ///
    /// ```
    /// use go_connections::patterns::PatternDatabase;
    ///
    /// let db = PatternDatabase::parse("
    ///     Pattern CC2
    ///     ?.?
    ///     O.O
    ///     ?.?
    ///     :C
    /// ").unwrap();
    ///
    /// assert_eq!(db.len(), 1);
    /// assert!(db.get("CC2").unwrap().class.is_connect());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut database = PatternDatabase::new();
        // (name, header line, diagram rows)
        let mut pending: Option<(String, usize, Vec<(usize, &str)>)> = None;

        for (n, raw) in text.lines().enumerate() {
            let line_no = n + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix("Pattern") {
                if let Some((open, _, _)) = &pending {
                    return Err(syntax(line_no, format!("pattern {} has no class line", open)));
                }
                let name = name.trim();
                if name.is_empty() {
                    return Err(syntax(line_no, "pattern without a name"));
                }
                pending = Some((name.to_string(), line_no, Vec::new()));
                continue;
            }

            let Some((name, header, rows)) = pending.as_mut() else {
                return Err(syntax(line_no, "diagram outside a pattern"));
            };

            if let Some(flags) = line.strip_prefix(':') {
                if rows.is_empty() {
                    return Err(syntax(*header, format!("pattern {} has no diagram", name)));
                }
                let class = parse_class(name, flags)?;
                let pattern = build(std::mem::take(name), rows, class)?;
                database.try_register(pattern)?;
                pending = None;
            } else {
                rows.push((line_no, line));
            }
        }

        if let Some((name, header, _)) = pending {
            return Err(syntax(header, format!("pattern {} has no class line", name)));
        }

        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_first_friendly_stone() {
        let pattern = Pattern::from_diagram("p", "?X?\nO.O", PatternClass::CONNECT).unwrap();

        assert_eq!(pattern.elements.len(), 4);
        assert_eq!(pattern.elements[0], PatternElement::new(Offset::new(-1, 1), ElementAttribute::Enemy));
        assert_eq!(pattern.elements[1], PatternElement::new(Offset::ZERO, ElementAttribute::Friendly));
        assert_eq!(pattern.elements[3].offset, Offset::new(0, 2));
        assert_eq!(pattern.move_offset, None);
    }

    #[test]
    fn test_cut_pattern_inhibitors_first() {
        let pattern = Pattern::from_diagram("wedge", "?X?\nO*O\n,?,", PatternClass::CUT).unwrap();

        assert_eq!(pattern.leading_inhibitors(), 2);
        assert_eq!(pattern.elements[0].offset, Offset::new(1, 0));
        assert_eq!(pattern.elements[1].offset, Offset::new(1, 2));
        // Remaining elements keep reading order
        assert_eq!(pattern.elements[2].attribute, ElementAttribute::Enemy);
        assert_eq!(pattern.move_offset, Some(Offset::new(0, 1)));
    }

    #[test]
    fn test_connect_pattern_keeps_reading_order() {
        let pattern = Pattern::from_diagram("c", "O,\n,O", PatternClass::CONNECT).unwrap();
        assert_eq!(pattern.leading_inhibitors(), 0);
    }

    #[test]
    fn test_diagram_errors() {
        assert_eq!(
            Pattern::from_diagram("none", "X.\n.X", PatternClass::CONNECT).unwrap_err(),
            AnalysisError::MissingAnchor("none".into())
        );
        assert_eq!(
            Pattern::from_diagram("two", "O**", PatternClass::CUT).unwrap_err(),
            AnalysisError::DuplicateMove("two".into())
        );
        assert_eq!(
            Pattern::from_diagram("nocut", "XO\nO.", PatternClass::CUT).unwrap_err(),
            AnalysisError::MissingCutPoint("nocut".into())
        );
        assert_eq!(
            Pattern::from_diagram("bad", "O\n#", PatternClass::NONE).unwrap_err(),
            AnalysisError::UnexpectedChar { ch: '#', line: 2 }
        );
    }

    #[test]
    fn test_parse_database() {
        let db = PatternDatabase::parse(
            "
            # two patterns
            Pattern CB1
            XO
            O*
            :8,B

            Pattern CC1
            OO
            ..
            OO
            :C
            ",
        )
        .unwrap();

        assert_eq!(db.len(), 2);
        assert!(db.get("CB1").unwrap().class.is_cut());
        assert_eq!(db.get("CC1").unwrap().elements.len(), 6);
    }

    #[test]
    fn test_parse_class_variants() {
        let db = PatternDatabase::parse("Pattern A\nO\n:-\nPattern B\nO*\n:Bs").unwrap();
        assert_eq!(db.get("A").unwrap().class, PatternClass::NONE);
        assert_eq!(
            db.get("B").unwrap().class,
            PatternClass::CUT | PatternClass::SUPPRESS_SAFETY_CHECK
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            PatternDatabase::parse("Pattern A\nO\n:Q").unwrap_err(),
            AnalysisError::UnknownClass { name: "A".into(), flag: 'Q' }
        );
        assert!(matches!(
            PatternDatabase::parse("O.O\n:C"),
            Err(AnalysisError::Syntax { line: 1, .. })
        ));
        assert!(matches!(
            PatternDatabase::parse("Pattern A\nO.O"),
            Err(AnalysisError::Syntax { line: 1, .. })
        ));
        assert!(matches!(
            PatternDatabase::parse("Pattern A\nO\nPattern B\nO\n:C"),
            Err(AnalysisError::Syntax { line: 3, .. })
        ));
        assert!(matches!(
            PatternDatabase::parse("Pattern A\n:C"),
            Err(AnalysisError::Syntax { line: 1, .. })
        ));
        assert_eq!(
            PatternDatabase::parse("Pattern A\nO\n:C\nPattern A\nO\n:C").unwrap_err(),
            AnalysisError::DuplicatePattern("A".into())
        );
    }
}
