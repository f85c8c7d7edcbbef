//! Page area for the current route.

use horizon_types::{DASHBOARD_ROUTE, LANDING_ROUTE, NotificationLevel, UserRecord};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::router::Router;
use crate::ui::components::Component;
use crate::ui::components::sidebar::menu::entry_for_path;
use crate::ui::icons::icon_glyph;
use crate::ui::theme::{Theme, theme_helpers as th};

const PROFILE_ROUTE: &str = "/profile";
const NOT_FOUND_TITLE: &str = "Page not found";

#[derive(Debug, Default)]
pub struct ContentComponent;

impl ContentComponent {
    fn landing_lines<'a>(theme: &dyn Theme, identity: Option<&'a UserRecord>) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(Span::styled("Welcome to Global Horizon", theme.accent_emphasis_style())),
            Line::from(""),
        ];
        match identity {
            Some(user) => lines.push(Line::from(format!("Signed in as {}. Open the menu to get started.", user.full_name))),
            None => lines.push(Line::styled(
                "Sign in to reach events, mentoring and the alumni directory.",
                theme.text_secondary_style(),
            )),
        }
        lines
    }

    fn profile_lines<'a>(theme: &dyn Theme, identity: Option<&'a UserRecord>) -> Vec<Line<'a>> {
        let Some(user) = identity else {
            return vec![Line::styled("No member is signed in.", theme.text_muted_style())];
        };
        let passout_year = user.passout_year.map(|year| year.to_string());
        let fields = [
            ("Name", Some(user.full_name.as_str())),
            ("Email", Some(user.email.as_str())),
            ("Passout year", passout_year.as_deref()),
            ("Location", user.current_location.as_deref()),
            ("Company", user.current_company.as_deref()),
            ("Domain", user.domain.as_deref()),
            ("Phone", user.phone.as_deref()),
        ];
        fields
            .into_iter()
            .filter_map(|(label, value)| {
                value.map(|value| {
                    Line::from(vec![
                        Span::styled(format!("{label:<14}"), theme.text_muted_style()),
                        Span::styled(value.to_string(), theme.text_primary_style()),
                    ])
                })
            })
            .collect()
    }

    fn section_lines<'a>(theme: &dyn Theme, route: &str, identity: Option<&'a UserRecord>) -> Vec<Line<'a>> {
        if route == DASHBOARD_ROUTE
            && let Some(user) = identity
        {
            return vec![Line::from(format!("Welcome back, {}!", user.first_name()))];
        }
        vec![Line::styled(format!("You are viewing {route}."), theme.text_secondary_style())]
    }
}

impl Component for ContentComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let route = app.router.current_route();
        let identity = app.ctx.identity.as_ref();

        let (title, lines) = match route {
            LANDING_ROUTE => ("Welcome".to_string(), Self::landing_lines(theme, identity)),
            PROFILE_ROUTE => ("Profile".to_string(), Self::profile_lines(theme, identity)),
            _ => match entry_for_path(route) {
                Some(entry) => (
                    format!("{} {}", icon_glyph(entry.icon), entry.label),
                    Self::section_lines(theme, route, identity),
                ),
                None => (
                    NOT_FOUND_TITLE.to_string(),
                    vec![Line::styled(
                        format!("Nothing lives at {route}."),
                        theme.status_style(NotificationLevel::Warning),
                    )],
                ),
            },
        };

        let block = th::block(theme, Some(&title), false);
        let page = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block).style(th::page_style(theme));
        frame.render_widget(page, area);
    }
}
