use anyhow::Result;
use gpui::{
    AnyView, App, AppContext, Application, Bounds, Context, KeyBinding, Menu, MenuItem,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use gpui_component_assets::Assets;
use tracing::{error, info};

use crate::{
    Quit,
    components::{TipCalculatorForm, WindowPreferences},
    config::AppConfig,
    quit, themes,
};

/// Starts the gpui event loop with the calculator window. Returns when the
/// application quits.
pub fn run(config: AppConfig) {
    Application::new()
        .with_assets(Assets)
        .run(move |app_cx: &mut App| {
            setup_app(app_cx, &config);

            if let Err(e) = open_main_window(app_cx, &config) {
                error!(?e, "Failed to open main window");
                app_cx.quit();
            }
        });
}

pub fn setup_app(
    app_cx: &mut App,
    config: &AppConfig,
) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);
    themes::apply_theme(&config.theme, app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "TipEase".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator centered on the primary display, wrapped in the
/// gpui-component root view.
pub fn open_main_window(
    app_cx: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let preferences = WindowPreferences::from(&config.window);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("TipEase".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, window_cx| {
        let form = window_cx.new(|form_cx: &mut Context<TipCalculatorForm>| {
            TipCalculatorForm::new(window, form_cx)
        });
        let view: AnyView = form.into();
        window_cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!(size = ?preferences.size, "Main window opened");
    Ok(())
}
