//! Line-shape rules for the constructs that are anchored to the start of a
//! fragment and run to its end.
//!
//! Each rule is a plain nom parser. [`whole_fragment`] runs one against a
//! fragment and only accepts it when the entire fragment is consumed.
use nom::IResult;
use nom::bytes::complete::tag;
use nom::character::complete::{char, one_of};
use nom::combinator::{all_consuming, recognize, rest, verify};
use nom::multi::many_m_n;
use nom::sequence::{pair, tuple};

/// One or more characters up to the end of the fragment.
fn rest_of_line(input: &str) -> IResult<&str, &str> {
    verify(rest, |s: &str| !s.is_empty() && !s.contains('\n'))(input)
}

/// `# Title` through `###### Title`.
pub(crate) fn heading(input: &str) -> IResult<&str, &str> {
    recognize(tuple((many_m_n(1, 6, char('#')), char(' '), rest_of_line)))(input)
}

/// `* item` or `- item`.
pub(crate) fn list_item(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("*-"), char(' '), rest_of_line)))(input)
}

/// `> quoted`.
pub(crate) fn blockquote(input: &str) -> IResult<&str, &str> {
    recognize(pair(tag("> "), rest_of_line))(input)
}

/// Exactly `---`.
pub(crate) fn thematic_break(input: &str) -> IResult<&str, &str> {
    tag("---")(input)
}

/// `|` ... `|` with at least one character between the outer pipes.
pub(crate) fn table_row(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        char('|'),
        verify(rest, |s: &str| {
            s.len() >= 2 && s.ends_with('|') && !s.contains('\n')
        }),
    ))(input)
}

/// `- [ ] text` or `- [x] text`, yielding the checked flag and the text.
pub(crate) fn task_item(input: &str) -> IResult<&str, (bool, &str)> {
    let (remaining, (_, mark, _, text)) =
        tuple((tag("- ["), one_of(" x"), tag("] "), rest_of_line))(input)?;
    Ok((remaining, (mark == 'x', text)))
}

/// Same shape as [`task_item`], recognising the whole item.
pub(crate) fn task_item_line(input: &str) -> IResult<&str, &str> {
    recognize(task_item)(input)
}

/// Runs `rule` against the whole fragment.
pub(crate) fn whole_fragment<'a, O>(
    rule: fn(&'a str) -> IResult<&'a str, O>,
    fragment: &'a str,
) -> Option<O> {
    all_consuming(rule)(fragment).ok().map(|(_, output)| output)
}

/// Returns the checked flag and text of a task-list item.
pub fn parse_task_item(content: &str) -> Option<(bool, &str)> {
    whole_fragment(task_item, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_accepts_one_to_six_hashes() {
        assert_eq!(whole_fragment(heading, "# Title"), Some("# Title"));
        assert_eq!(whole_fragment(heading, "###### Six"), Some("###### Six"));
        assert_eq!(whole_fragment(heading, "####### Seven"), None);
        assert_eq!(whole_fragment(heading, "#NoSpace"), None);
        assert_eq!(whole_fragment(heading, "#"), None);
        assert_eq!(whole_fragment(heading, "#  padded"), Some("#  padded"));
    }

    #[test]
    fn list_item_requires_marker_and_space() {
        assert!(whole_fragment(list_item, "* star").is_some());
        assert!(whole_fragment(list_item, "- dash").is_some());
        assert!(whole_fragment(list_item, "+ plus").is_none());
        assert!(whole_fragment(list_item, "-dash").is_none());
    }

    #[test]
    fn blockquote_and_thematic_break() {
        assert!(whole_fragment(blockquote, "> quoted").is_some());
        assert!(whole_fragment(blockquote, ">quoted").is_none());
        assert!(whole_fragment(thematic_break, "---").is_some());
        assert!(whole_fragment(thematic_break, "----").is_none());
        assert!(whole_fragment(thematic_break, "--").is_none());
    }

    #[test]
    fn table_row_needs_content_between_pipes() {
        assert!(whole_fragment(table_row, "| a | b |").is_some());
        assert!(whole_fragment(table_row, "|x|").is_some());
        assert!(whole_fragment(table_row, "|||").is_some());
        assert!(whole_fragment(table_row, "||").is_none());
        assert!(whole_fragment(table_row, "| open").is_none());
    }

    #[test]
    fn task_item_reads_checked_flag() {
        assert_eq!(parse_task_item("- [x] done"), Some((true, "done")));
        assert_eq!(parse_task_item("- [ ] todo"), Some((false, "todo")));
        assert_eq!(parse_task_item("- [X] upper"), None);
        assert_eq!(parse_task_item("* [x] star"), None);
        assert_eq!(parse_task_item("- [x]"), None);
    }
}
