// csv2report-report - Fixed-layout report rendering
//
// Transforms one retained history entry into a paginated plain-text
// document. Rendering is deterministic: the same entry always produces
// byte-identical output, and the embedded timestamp is the entry's
// creation time, never the wall clock at render time.

use csv2report_core::schema::NUMERIC_COLUMNS;
use csv2report_history::{EntryId, HistoryEntry};

const PAGE_WIDTH: usize = 72;
const PAGE_BODY_LINES: usize = 40;
const TITLE: &str = "Chemical Equipment Parameter Report";

/// Suggested download filename for an entry's report.
pub fn report_filename(id: &EntryId) -> String {
    format!("equipment_report_{id}.pdf")
}

/// Render one history entry as a paginated document
///
/// Layout, top to bottom: title, dataset name, generation timestamp
/// (`YYYY-MM-DD HH:MM`), a Summary section with the total count, the three
/// numeric averages in fixed order (undefined averages render as `-`), and
/// the category distribution as `category: count` pairs in sorted order.
///
/// Never fails on a well-formed entry; resolving a missing entry is the
/// caller's job, via the history store.
pub fn render(entry: &HistoryEntry) -> Vec<u8> {
    let mut lines = Vec::new();

    lines.push(TITLE.to_string());
    lines.push("=".repeat(TITLE.len()));
    lines.push(String::new());
    lines.push(format!("Dataset: {}", entry.name));
    lines.push(format!(
        "Generated: {}",
        entry.created_at.format("%Y-%m-%d %H:%M")
    ));
    lines.push(String::new());
    lines.push("Summary".to_string());
    lines.push("-".repeat("Summary".len()));
    lines.push(format!("Total equipment count: {}", entry.row_count));

    let averages = NUMERIC_COLUMNS
        .iter()
        .map(|column| {
            let value = entry.summary.averages.get(*column).copied().flatten();
            format!("{column}: {}", format_average(value))
        })
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Averages - {averages}"));

    let distribution = entry
        .summary
        .category_distribution
        .iter()
        .map(|(category, count)| format!("{category}: {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("Type distribution: {distribution}"));

    paginate(&lines)
}

/// 2-decimal, trailing-zero-stable formatting; `-` for an undefined mean.
fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}

/// Split body lines into fixed-height pages, each with a numbered footer.
fn paginate(lines: &[String]) -> Vec<u8> {
    let chunks: Vec<&[String]> = if lines.is_empty() {
        vec![&[]]
    } else {
        lines.chunks(PAGE_BODY_LINES).collect()
    };
    let page_count = chunks.len();

    let mut pages = Vec::with_capacity(page_count);
    for (index, chunk) in chunks.into_iter().enumerate() {
        let mut page = String::new();
        for line in chunk {
            page.push_str(line);
            page.push('\n');
        }
        for _ in chunk.len()..PAGE_BODY_LINES {
            page.push('\n');
        }
        page.push_str(&"-".repeat(PAGE_WIDTH));
        page.push('\n');
        page.push_str(&format!("Page {} of {}\n", index + 1, page_count));
        pages.push(page);
    }

    pages.join("\u{c}").into_bytes()
}
