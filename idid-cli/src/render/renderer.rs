use super::theme::OneDark;
use idid_core::{Advice, DailySummary, Decision, LogEntry};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

pub struct Renderer {
    skin: MadSkin,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Self {
        Self {
            skin: OneDark::skin(),
            use_color,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// One line per log entry: `12:30 text (id)`.
    pub fn print_log_line(&self, entry: &LogEntry) {
        let mut time = entry.time.format("%H:%M").to_string();
        let mut id = entry.id.to_string();
        if self.use_color {
            time = time.with(Color::Blue).to_string();
            id = id.with(OneDark::COMMENT).to_string();
        }
        println!("{} {} ({})", time, entry.text, id);
    }

    pub fn print_summary(&self, summary: &DailySummary) {
        let keywords = if summary.keywords.is_empty() {
            "-".to_string()
        } else {
            summary.keywords.join(", ")
        };
        // No mood glyph for a day without entries.
        let mood = summary.mood_glyph().unwrap_or("-");
        let md = format!(
            "# {}\n> {}\n* **keywords:** {}\n* **mood:** {}\n* **entries:** {}\n",
            summary.date, summary.one_line, keywords, mood, summary.count
        );
        self.print_md(&md);
    }

    pub fn print_advice(&self, advice: &Advice) {
        let mut md = format!("# {}\n\n## Pros\n", advice.suggestion);
        for pro in &advice.pros {
            md.push_str(&format!("* {pro}\n"));
        }
        md.push_str("\n## Cons\n");
        for con in &advice.cons {
            md.push_str(&format!("* {con}\n"));
        }
        self.print_md(&md);
    }

    pub fn print_decision_line(&self, decision: &Decision) {
        let mut stamp = decision
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string();
        let mut question = decision.question.clone();
        if self.use_color {
            stamp = stamp.with(Color::Cyan).to_string();
            question = question.with(Color::Yellow).to_string();
        }
        println!("{} {}", stamp, question);
        println!("  {}", decision.suggestion);
    }
}
