use super::{Dashboard, DashboardState};
use crate::api::{Endpoint, WeatherApi, decode_theme};
use crate::ui::{ViewTree, render};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeCheck {
    Unchanged,
    Changed(String),
    /// Logged and otherwise ignored until the next tick
    Failed,
}

impl<A: WeatherApi> Dashboard<A> {
    /// Poll the backend theme. Never touches data rendering and never
    /// surfaces a failure to the status line.
    pub async fn check_theme(&self) -> ThemeCheck {
        let theme = match self.api.fetch(Endpoint::Theme).await {
            Ok(body) => decode_theme(&body),
            Err(e) => Err(e),
        };
        let theme = match theme {
            Ok(t) => t,
            Err(e) => {
                self.logger.warn(&format!("Theme check failed: {}", e));
                return ThemeCheck::Failed;
            }
        };

        let mut state = self.state.lock().await;
        if state.current_theme == theme {
            return ThemeCheck::Unchanged;
        }
        let mut view = self.view.lock().await;
        self.switch_theme(&mut state, &mut view, &theme);
        ThemeCheck::Changed(theme)
    }

    pub(super) fn switch_theme(&self, state: &mut DashboardState, view: &mut ViewTree, theme: &str) {
        if state.current_theme == theme {
            return;
        }
        render::apply_theme(view, Some(&state.current_theme), theme);
        self.logger.info(&format!(
            "Theme changed: {} -> {}",
            state.current_theme, theme
        ));
        state.current_theme = theme.to_string();
    }
}
