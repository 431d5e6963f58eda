//! Text layout of the mail body: a separator, the line's location and a
//! `git log`-style commit record.

use crate::error::Result;
use crate::models::CommitRecord;

/// Rule separating the reply area from the quoted context.
pub const SEPARATOR: &str =
    "--------------------------------------------------------------------------------";

/// `ddd dd MMM HH:mm:ss yyyy +HH:MM`. chrono only knows English names, so the
/// output does not depend on the process locale.
pub const DATE_FORMAT: &str = "%a %d %b %H:%M:%S %Y %:z";

pub fn format_context(relative_path: &str, line_number: u32) -> String {
    format!("File: {}\nLine: {}", relative_path, line_number)
}

/// Render a commit the way `git log` prints it.
///
/// `shorten` abbreviates parent ids and is only called for merge commits.
pub fn format_commit<F>(commit: &CommitRecord, mut shorten: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut out = String::new();

    out.push_str(&format!("commit {}\n", commit.id));

    if commit.is_merge() {
        let parents = commit
            .parents
            .iter()
            .map(|id| shorten(id))
            .collect::<Result<Vec<_>>>()?;
        out.push_str(&format!("Merge: {}\n", parents.join(" ")));
    }

    out.push_str(&format!(
        "Author: {} <{}>\n",
        commit.author.name, commit.author.email
    ));
    out.push_str(&format!("Date:   {}\n", commit.when.format(DATE_FORMAT)));
    out.push('\n');
    out.push_str(&commit.message);
    out.push('\n');
    out.push('\n');

    Ok(out)
}

/// Join the body parts. The leading empty part leaves two blank lines at
/// the top of the mail for the reply.
pub fn build_body(context: &str, commit: &str) -> String {
    ["", SEPARATOR, context, commit].join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::AuthorInfo;
    use chrono::{DateTime, FixedOffset};

    fn commit(parents: &[&str]) -> CommitRecord {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        CommitRecord {
            id: "4b825dc642cb6eb9a060e54bf8d69288fbee4904".to_string(),
            author: AuthorInfo {
                name: "A. Author".to_string(),
                email: "a@example.com".to_string(),
            },
            when: DateTime::from_timestamp(1_700_000_000, 0)
                .unwrap()
                .with_timezone(&offset),
            parents: parents.iter().map(|p| p.to_string()).collect(),
            message: "Fix the frobnicator\n\nIt was broken.\n".to_string(),
        }
    }

    fn short(id: &str) -> Result<String> {
        Ok(id[..7].to_string())
    }

    #[test]
    fn test_author_and_date_lines() {
        let text = format_commit(&commit(&[]), short).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "commit 4b825dc642cb6eb9a060e54bf8d69288fbee4904");
        assert_eq!(lines[1], "Author: A. Author <a@example.com>");
        assert_eq!(lines[2], "Date:   Wed 15 Nov 00:13:20 2023 +02:00");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_negative_offset_date() {
        let mut record = commit(&[]);
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        record.when = DateTime::from_timestamp(1_600_000_000, 0)
            .unwrap()
            .with_timezone(&offset);
        let text = format_commit(&record, short).unwrap();
        assert!(text.contains("\nDate:   Sun 13 Sep 07:26:40 2020 -05:00\n"));
    }

    #[test]
    fn test_message_is_verbatim_with_trailing_blank_line() {
        let text = format_commit(&commit(&[]), short).unwrap();
        assert!(text.ends_with("\n\nFix the frobnicator\n\nIt was broken.\n\n\n"));
    }

    #[test]
    fn test_merge_line_lists_abbreviated_parents() {
        let record = commit(&[
            "1111111aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "2222222bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
        ]);
        let text = format_commit(&record, short).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Merge: 1111111 2222222");
        assert_eq!(lines[2], "Author: A. Author <a@example.com>");
    }

    #[test]
    fn test_single_parent_has_no_merge_line() {
        let mut calls = 0;
        let record = commit(&["1111111aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"]);
        let text = format_commit(&record, |id| {
            calls += 1;
            short(id)
        })
        .unwrap();
        assert!(!text.contains("Merge:"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_shorten_failure_propagates() {
        let record = commit(&[
            "1111111aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
            "2222222bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
        ]);
        let err = format_commit(&record, |_| Err(AppError::Internal("odb gone".to_string())));
        assert!(err.is_err());
    }

    #[test]
    fn test_body_layout() {
        let body = build_body(&format_context("src/lib.rs", 7), "commit abc\n");
        assert_eq!(
            body,
            format!("\n\n{}\n\nFile: src/lib.rs\nLine: 7\n\ncommit abc\n", SEPARATOR)
        );
        assert_eq!(SEPARATOR.len(), 80);
    }
}
