use backoffice_utils::version_info::{self, BuildEnv};
use egui::{Color32, Response, Ui};

/// Displays the build environment and version in the top bar.
///
/// - Prod: `stable:{version}`
/// - Staging: `staging:{date}`
/// - Internal: `internal:{commit}`
/// - Test: `test:{commit}`
pub fn env_version(ui: &mut Ui) -> Response {
    let color = match BuildEnv::current() {
        BuildEnv::Prod => Color32::GREEN,
        BuildEnv::Staging => Color32::from_rgb(255, 165, 0), // Orange
        BuildEnv::Internal => Color32::YELLOW,
        BuildEnv::Test => Color32::from_rgb(200, 200, 200), // Light gray
    };

    ui.colored_label(color, version_info::format_env_version())
}

#[cfg(test)]
mod env_version_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn test_env_version_widget() {
        let mut harness = Harness::new_ui(|ui| {
            super::env_version(ui);
        });
        harness.step();

        // env:info
        let found = harness.query_by_label_contains(":");
        assert!(
            found.is_some(),
            "env_version widget should display format like 'env:info'"
        );
    }
}
