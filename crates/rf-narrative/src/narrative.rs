//! Narrative builder.
//!
//! The rule tag is treated as opaque justification: forced rounds get their
//! own copy, everything else is keyed on the result alone.

use serde::Serialize;

use rf_core::{RandomSource, RoundResult, Rule, pick_index};

use crate::mode::Mode;
use crate::quiz::QuizAnswers;

/// Everything needed to narrate one round.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeRequest<'a> {
    /// Narrative mode.
    pub mode: Mode,
    /// Round result.
    pub result: RoundResult,
    /// Rule that decided the round.
    pub rule: Rule,
    /// The player's display name, as entered.
    pub user_name: &'a str,
    /// The crush's display name, as entered.
    pub crush_name: &'a str,
    /// The player's quiz answers.
    pub quiz: &'a QuizAnswers,
}

/// A narrated round result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    /// Headline.
    pub title: String,
    /// Body paragraphs, plain text.
    pub paragraphs: Vec<String>,
    /// Result used to style the narrative.
    pub result_class: RoundResult,
    /// One-line summary for sharing.
    pub summary: String,
    /// Raw name pieces used by [`Narrative::to_html`].
    #[serde(skip)]
    segments: Vec<Vec<Segment>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Name(String),
}

impl Narrative {
    /// Paragraphs joined by newlines.
    pub fn to_plain_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// Paragraphs as HTML, with names in `<strong>` and all text escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for segments in &self.segments {
            html.push_str("<p>");
            for segment in segments {
                match segment {
                    Segment::Text(text) => html.push_str(&escape_html(text)),
                    Segment::Name(name) => {
                        html.push_str("<strong>");
                        html.push_str(&escape_html(name));
                        html.push_str("</strong>");
                    }
                }
            }
            html.push_str("</p>");
        }
        html
    }
}

/// Build the narrative for a decided round.
///
/// Draws exactly one value from `random` to pick the title.
pub fn build_narrative<R>(request: &NarrativeRequest<'_>, random: &mut R) -> Narrative
where
    R: RandomSource + ?Sized,
{
    let style = request.mode.style();
    let flavor = request.quiz.flavor_line();
    let user = request.user_name;
    let crush = request.crush_name;

    let (titles, segments) = match (request.rule, request.result) {
        (Rule::ForcedWin, _) => (
            &style.win_titles,
            vec![
                vec![
                    text("💖 "),
                    name(user),
                    text(", this one is non-negotiable."),
                ],
                vec![name(crush), text(" is star-approved for you tonight.")],
                vec![text(&format!("{flavor} {}", style.win_cta))],
            ],
        ),
        (Rule::ForcedLose, _) => (
            &style.lose_titles,
            vec![
                vec![
                    text("⚡ "),
                    name(user),
                    text(", fate is being strict and possessive."),
                ],
                vec![name(crush), text(" is rejected in this timeline.")],
                vec![text(&format!("{flavor} Save that energy for the right fire."))],
            ],
        ),
        (Rule::Random, RoundResult::Win) => (
            &style.win_titles,
            vec![
                vec![
                    text("🌹 "),
                    name(user),
                    text(", your move had irresistible timing."),
                ],
                vec![
                    text("With "),
                    name(crush),
                    text(", the chemistry feels very real right now."),
                ],
                vec![text(&format!("{flavor} {}", style.win_cta))],
            ],
        ),
        (Rule::Random, RoundResult::Lose) => (
            &style.lose_titles,
            vec![
                vec![
                    text("💔 "),
                    name(user),
                    text(", beautiful vibe, wrong alignment."),
                ],
                vec![
                    text("As tempting as "),
                    name(crush),
                    text(" looks, tonight says pass."),
                ],
                vec![text(&format!("{flavor} Keep your standards high."))],
            ],
        ),
        (Rule::Random, RoundResult::Tie) => (
            &style.tie_titles,
            vec![
                vec![
                    text("✨ "),
                    name(user),
                    text(", fate is flirting back but not answering yet."),
                ],
                vec![
                    text("The story with "),
                    name(crush),
                    text(" is still unfolding."),
                ],
                vec![text(&format!("{flavor} Give it one more night and ask again."))],
            ],
        ),
    };

    let title = titles[pick_index(random.next_unit(), titles.len())].to_string();
    let paragraphs = segments.iter().map(Vec::as_slice).map(flatten).collect();
    let summary = format!("{title}. {user} + {crush}. {}. {flavor}", request.result);

    Narrative {
        title,
        paragraphs,
        result_class: request.result,
        summary,
        segments,
    }
}

fn text(s: &str) -> Segment {
    Segment::Text(s.to_string())
}

fn name(s: &str) -> Segment {
    Segment::Name(s.to_string())
}

fn flatten(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s {
            Segment::Text(t) | Segment::Name(t) => t.as_str(),
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::{FlirtStyle, Rhythm, Spark};

    fn request<'a>(
        mode: Mode,
        result: RoundResult,
        rule: Rule,
        quiz: &'a QuizAnswers,
    ) -> NarrativeRequest<'a> {
        NarrativeRequest {
            mode,
            result,
            rule,
            user_name: "Riya",
            crush_name: "Arjun",
            quiz,
        }
    }

    fn fixed(r: f64) -> impl FnMut() -> f64 {
        move || r
    }

    #[test]
    fn forced_win_copy() {
        let quiz = QuizAnswers::new();
        let n = build_narrative(
            &request(Mode::Spicy, RoundResult::Win, Rule::ForcedWin, &quiz),
            &mut fixed(0.0),
        );
        assert_eq!(n.title, "Chemistry: Certified");
        assert_eq!(n.paragraphs[0], "💖 Riya, this one is non-negotiable.");
        assert_eq!(n.paragraphs[1], "Arjun is star-approved for you tonight.");
        assert!(n.paragraphs[2].ends_with("Text first. Overthink later."));
        assert_eq!(n.result_class, RoundResult::Win);
    }

    #[test]
    fn forced_lose_copy() {
        let quiz = QuizAnswers::new();
        let n = build_narrative(
            &request(Mode::Sweet, RoundResult::Lose, Rule::ForcedLose, &quiz),
            &mut fixed(0.99),
        );
        assert_eq!(n.title, "Not Your Soft Place");
        assert_eq!(n.paragraphs[1], "Arjun is rejected in this timeline.");
        assert!(n.paragraphs[2].ends_with("Save that energy for the right fire."));
    }

    #[test]
    fn random_branches_follow_result() {
        let quiz = QuizAnswers::new();
        let win = build_narrative(
            &request(Mode::Chaotic, RoundResult::Win, Rule::Random, &quiz),
            &mut fixed(0.5),
        );
        assert_eq!(win.title, "Chaos Says Yes");
        assert!(win.paragraphs[0].starts_with("🌹 Riya"));

        let lose = build_narrative(
            &request(Mode::Chaotic, RoundResult::Lose, Rule::Random, &quiz),
            &mut fixed(0.5),
        );
        assert_eq!(lose.title, "Plot Twist: Nope");
        assert_eq!(lose.paragraphs[1], "As tempting as Arjun looks, tonight says pass.");

        let tie = build_narrative(
            &request(Mode::Chaotic, RoundResult::Tie, Rule::Random, &quiz),
            &mut fixed(0.5),
        );
        assert_eq!(tie.title, "The Universe Is Buffering");
        assert_eq!(tie.result_class, RoundResult::Tie);
        assert!(tie.paragraphs[2].ends_with("Give it one more night and ask again."));
    }

    #[test]
    fn summary_line() {
        let quiz = QuizAnswers::new()
            .with_spark(Spark::Voice)
            .with_style(FlirtStyle::Soft)
            .with_rhythm(Rhythm::Unhinged);
        let n = build_narrative(
            &request(Mode::Spicy, RoundResult::Tie, Rule::Random, &quiz),
            &mut fixed(0.0),
        );
        assert_eq!(
            n.summary,
            "A Teasing Maybe. Riya + Arjun. tie. Your soft-burn flirting style craves that irresistible voice note and a beautiful chaos."
        );
    }

    #[test]
    fn html_escapes_names() {
        let quiz = QuizAnswers::new();
        let req = NarrativeRequest {
            user_name: "<b>Riya</b>",
            crush_name: "Tom & \"Jerry\"",
            ..request(Mode::Spicy, RoundResult::Win, Rule::ForcedWin, &quiz)
        };
        let html = build_narrative(&req, &mut fixed(0.0)).to_html();
        assert!(html.starts_with("<p>💖 <strong>&lt;b&gt;Riya&lt;/b&gt;</strong>, this one"));
        assert!(html.contains("<strong>Tom &amp; &quot;Jerry&quot;</strong> is star-approved"));
        assert_eq!(html.matches("<p>").count(), 3);
    }

    #[test]
    fn plain_text_joins_paragraphs() {
        let quiz = QuizAnswers::new();
        let n = build_narrative(
            &request(Mode::Spicy, RoundResult::Lose, Rule::Random, &quiz),
            &mut fixed(0.0),
        );
        assert_eq!(n.to_plain_text().lines().count(), 3);
        assert!(!n.to_plain_text().contains('<'));
    }
}
