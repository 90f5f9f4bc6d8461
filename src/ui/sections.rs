//! Content of the page sections as styled lines.
//!
//! Everything here is pure: the same `App` always yields the same lines, so
//! the TUI and the plain-text preview share it.

use super::app::{App, Section};
use crate::contact::Field;
use crate::game::GameStatus;
use crate::profile::{self, Degree, Job, Project, PROFILE, SKILLS};
use chrono::Datelike;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const BULLET: &str = "  • ";

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn bullets(items: &[String]) -> impl Iterator<Item = Line<'static>> + '_ {
    items
        .iter()
        .map(|item| Line::from(format!("{}{}", BULLET, item)))
}

/// Lines of `section` in the app's current language
pub fn section_lines(section: Section, app: &App) -> Vec<Line<'static>> {
    match section {
        Section::Home => home(app),
        Section::Projects => projects(app),
        Section::Experience => jobs(app, "experience.items"),
        Section::Education => education(app),
        Section::Volunteering => jobs(app, "volunteering.items"),
        Section::Skills => skills(),
        Section::Contact => contact(app),
        Section::Game => game_summary(app),
    }
}

fn home(app: &App) -> Vec<Line<'static>> {
    let ctx = &app.language;
    vec![
        heading(ctx.t_args("profile.greeting", &[("name", PROFILE.name)])),
        Line::from(Span::styled(
            ctx.t("profile.role").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(ctx.t("profile.tagline").to_string()),
        Line::default(),
        Line::from(ctx.t("profile.description").to_string()),
        Line::default(),
        Line::from(format!(
            "{}, {}",
            ctx.t_args("profile.basedIn", &[("location", PROFILE.location)]),
            ctx.t("profile.lookingFor")
        )),
        Line::from(ctx.t("profile.subsidy").to_string()),
        Line::default(),
        Line::from(vec![dim("✉ "), Span::raw(PROFILE.email)]),
        Line::from(vec![dim("☎ "), Span::raw(PROFILE.phone)]),
        Line::from(vec![dim("GitHub   "), Span::raw(PROFILE.github)]),
        Line::from(vec![dim("LinkedIn "), Span::raw(PROFILE.linkedin)]),
        Line::from(vec![
            dim(format!("{} ", ctx.t("nav.resume"))),
            Span::raw(app.resume_path.clone()),
        ]),
    ]
}

fn projects(app: &App) -> Vec<Line<'static>> {
    let items: Vec<Project> = app.language.items("projects.items");
    let mut lines = Vec::new();

    for project in items {
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(project.description.clone()));

        let tags: Vec<Span<'static>> = profile::project_tags(&project.title)
            .iter()
            .map(|tag| Span::styled(format!("[{}] ", tag), Style::default().fg(Color::Magenta)))
            .collect();
        if !tags.is_empty() {
            lines.push(Line::from(tags));
        }
        if let Some(repo) = profile::project_repo(&project.title) {
            lines.push(Line::from(dim(repo)));
        }
        lines.push(Line::default());
    }

    lines
}

fn jobs(app: &App, key: &str) -> Vec<Line<'static>> {
    let items: Vec<Job> = app.language.items(key);
    let mut lines = Vec::new();

    for job in items {
        lines.push(Line::from(vec![
            Span::styled(job.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            dim(format!("  {}", job.dates)),
        ]));
        lines.extend(bullets(&job.bullets));
        lines.push(Line::default());
    }

    lines
}

fn education(app: &App) -> Vec<Line<'static>> {
    let items: Vec<Degree> = app.language.items("education.items");
    let mut lines = Vec::new();

    for degree in items {
        lines.push(Line::from(Span::styled(
            degree.degree.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::raw(degree.school.clone()),
            dim(format!("  {}", degree.dates)),
        ]));
        lines.extend(bullets(&degree.bullets));
        lines.push(Line::default());
    }

    lines
}

fn skills() -> Vec<Line<'static>> {
    SKILLS
        .chunks(6)
        .map(|row| Line::from(row.join(" · ")))
        .collect()
}

fn contact(app: &App) -> Vec<Line<'static>> {
    let ctx = &app.language;
    let mut lines = vec![Line::default()];

    for field in Field::ALL {
        let focused = app.editing && app.field == field;
        let marker = if focused { "▸ " } else { "  " };
        let cursor = if focused { "▏" } else { "" };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                format!("{:<10}", ctx.t(field.label_key())),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(format!("{}{}", app.contact.form.field(field), cursor)),
        ]));
    }

    let button = if app.contact.is_sending() {
        ctx.t("contact.sending")
    } else {
        ctx.t("contact.send")
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", button),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )));
    lines.push(Line::default());
    lines.push(Line::from(dim(ctx.t("ui.contactHints"))));
    lines
}

fn game_summary(app: &App) -> Vec<Line<'static>> {
    let ctx = &app.language;
    let state = app.game.state();

    let mut lines = vec![
        Line::from(ctx.t("game.instructions").to_string()),
        Line::from(format!(
            "{}: {}   {}: {}",
            ctx.t("game.score"),
            state.score,
            ctx.t("game.high"),
            app.game.high_score()
        )),
    ];
    if let Some(status) = status_text(app) {
        lines.push(Line::from(status));
    }
    lines
}

/// Status line for paused and finished games
pub fn status_text(app: &App) -> Option<String> {
    let ctx = &app.language;
    match app.game.status() {
        GameStatus::Paused => Some(ctx.t("game.paused").to_string()),
        GameStatus::GameOver => Some(ctx.t_args(
            "game.gameOver",
            &[("score", &app.game.state().score.to_string())],
        )),
        GameStatus::Idle | GameStatus::Running => None,
    }
}

pub fn footer_line(app: &App) -> Line<'static> {
    let year = chrono::Local::now().year();
    Line::from(format!(
        "© {} {}. {}",
        year,
        PROFILE.name,
        app.language.t("footer.rights")
    ))
}

/// Flatten styled lines into plain text
pub fn plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
