//! Plain text rendering of [`DocumentStats`].

use std::fmt::Write;

use crate::stats::DocumentStats;

const RULE: &str = "--------------------------------------";

/// Renders the statistics report of a document.
///
/// The report is returned as a string; writing it to the console, a file
/// or an HTTP response is up to the caller.
pub fn render_report(document_name: &str, stats: &DocumentStats) -> String {
	let mut out = String::new();
	// Writing into a String never fails
	let _ = write_report(&mut out, document_name, stats);
	out
}

fn write_report(out: &mut String, document_name: &str, stats: &DocumentStats) -> std::fmt::Result {
	writeln!(out, "Analyzed document: {document_name}")?;
	writeln!(out, "======================================\n\n")?;

	writeln!(out, "Letter information:")?;
	writeln!(out, "{RULE}\n")?;
	writeln!(out, "Let. |  Frequency")?;
	writeln!(out, "-----|---------")?;
	for letter in &stats.letters {
		writeln!(out, "  {}  |  {}", letter.letter, letter.count)?;
	}
	writeln!(out, "{RULE}\n")?;
	writeln!(out, "\n\n")?;

	writeln!(out, "Word information:")?;
	writeln!(out, "{RULE}\n")?;
	writeln!(out, "Count of words:         {}", stats.token_count)?;
	writeln!(out, "Number of unique words: {}", stats.vocabulary_size)?;
	writeln!(out, "{RULE}\n")?;
	writeln!(out, "\n\n")?;

	writeln!(out, "Most frequent words:")?;
	writeln!(out, "{RULE}\n")?;
	for frequent in &stats.frequent_words {
		writeln!(out, "Word: - '{}' - (Freq: {})\n", frequent.word, frequent.count)?;
		writeln!(out, "Most frequent next words:")?;
		if frequent.followers.is_empty() {
			writeln!(out, "--> (none)")?;
		}
		for (rank, follower) in frequent.followers.iter().enumerate() {
			writeln!(out, "--> {}. {}      (Freq: {})", rank + 1, follower.word, follower.count)?;
		}
		writeln!(out, "{RULE}\n")?;
	}

	Ok(())
}
