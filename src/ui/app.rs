use std::cell::RefCell;
use std::rc::Rc;

use gettextrs::gettext;
use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;

use super::config::GameConfig;
use super::debug_tools;
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::geometry::Point;
use super::hud::update_header;
use super::input::{self, TimedAction};
use super::render;
use super::scene;
use super::state::AppState;
use super::surface::CairoSurface;

pub const APP_ID: &str = "io.basshift.MemoryMatch";
const CONTENT_MARGIN: i32 = 12;

/// Widgets that mirror the session. Owned by the signal handlers.
struct Shell {
    state: Rc<RefCell<AppState>>,
    window: adw::ApplicationWindow,
    canvas: gtk::DrawingArea,
    subtitle: gtk::Label,
    restart_button: gtk::Button,
}

impl Shell {
    fn refresh(&self) {
        update_header(&self.state.borrow(), &self.subtitle, &self.restart_button);
        self.canvas.queue_draw();
    }
}

fn schedule_timed(shell: &Rc<Shell>, action: TimedAction) {
    log::debug!("scheduling {:?} in {} ms", action.kind, action.delay_ms);
    let shell = shell.clone();
    glib::timeout_add_local_once(
        std::time::Duration::from_millis(action.delay_ms),
        move || {
            let changed = input::fire_timed(&mut shell.state.borrow_mut(), action);
            if changed {
                shell.refresh();
            }
        },
    );
}

fn handle_pointer_click(shell: &Rc<Shell>, x: f64, y: f64) {
    let outcome = input::handle_click(&mut shell.state.borrow_mut(), Point::new(x, y));
    if let Some(action) = outcome.timed_action() {
        schedule_timed(shell, action);
    }
    if outcome.needs_redraw() {
        shell.refresh();
    }
}

fn handle_key(shell: &Rc<Shell>, key: gdk::Key, mods: gdk::ModifierType) -> glib::Propagation {
    let consumed = debug_tools::handle_debug_shortcut(&mut shell.state.borrow_mut(), key, mods);
    if consumed {
        shell.refresh();
        return glib::Propagation::Stop;
    }

    if key == gdk::Key::Escape {
        let dialog_open = shell.window.visible_dialog().is_some();
        let left = scene::escape_to_level_select(&mut shell.state.borrow_mut(), dialog_open);
        if left {
            shell.refresh();
            return glib::Propagation::Stop;
        }
    }
    glib::Propagation::Proceed
}

fn restart_game(shell: &Rc<Shell>) {
    scene::restart(&mut shell.state.borrow_mut());
    shell.refresh();
}

fn build_canvas(state: &Rc<RefCell<AppState>>) -> gtk::DrawingArea {
    let surface_size = state.borrow().config.surface;
    let canvas = gtk::DrawingArea::builder()
        .content_width(surface_size.width as i32)
        .content_height(surface_size.height as i32)
        .halign(gtk::Align::Center)
        .valign(gtk::Align::Center)
        .build();

    let state_draw = state.clone();
    canvas.set_draw_func(move |_, cr, _, _| {
        let st = state_draw.borrow();
        let mut surface = CairoSurface::new(cr);
        if let Err(err) = render::draw_scene(&mut surface, &st) {
            log::warn!("frame skipped: {err}");
        }
    });

    let state_tick = state.clone();
    canvas.add_tick_callback(move |area, _clock| {
        if scene::advance_frame(&mut state_tick.borrow_mut()) {
            area.queue_draw();
        }
        glib::ControlFlow::Continue
    });

    canvas
}

fn build_title() -> (gtk::Box, gtk::Label) {
    let title_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    title_box.set_valign(gtk::Align::Center);
    title_box.set_halign(gtk::Align::Center);

    let title_main = gtk::Label::builder()
        .label(gettext("Memory Match"))
        .halign(gtk::Align::Center)
        .css_classes(vec!["title"])
        .build();
    let subtitle = gtk::Label::builder()
        .label("")
        .halign(gtk::Align::Center)
        .css_classes(vec!["subtitle", "caption"])
        .build();

    title_box.append(&title_main);
    title_box.append(&subtitle);
    (title_box, subtitle)
}

fn install_actions(app: &adw::Application) {
    let instructions_action = SimpleAction::new("instructions", None);
    instructions_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_instructions_dialog(&app);
        }
    });
    app.add_action(&instructions_action);

    let about_action = SimpleAction::new("about", None);
    about_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_about_dialog(&app);
        }
    });
    app.add_action(&about_action);

    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Control>q"]);
}

fn build_window(app: &adw::Application, config: GameConfig) {
    install_actions(app);

    log::info!(
        "starting {:?} variant on a {}x{} surface",
        config.variant,
        config.surface.width,
        config.surface.height
    );
    let state = Rc::new(RefCell::new(AppState::new(config)));
    let canvas = build_canvas(&state);
    let (title_box, subtitle) = build_title();

    let restart_button = gtk::Button::builder()
        .icon_name("view-refresh-symbolic")
        .build();
    restart_button.set_tooltip_text(Some(&gettext("New Board")));

    let menu_model = gio::Menu::new();
    menu_model.append(Some(&gettext("Instructions")), Some("app.instructions"));
    menu_model.append(Some(&gettext("About Memory Match")), Some("app.about"));
    menu_model.append(Some(&gettext("Quit")), Some("app.quit"));
    let menu_button = gtk::MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu_model)
        .build();

    let header = adw::HeaderBar::builder().title_widget(&title_box).build();
    header.add_css_class("flat");
    let end_box = gtk::Box::new(gtk::Orientation::Horizontal, 6);
    end_box.append(&restart_button);
    end_box.append(&menu_button);
    header.pack_end(&end_box);

    let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
    content.set_margin_top(CONTENT_MARGIN);
    content.set_margin_bottom(CONTENT_MARGIN);
    content.set_margin_start(CONTENT_MARGIN);
    content.set_margin_end(CONTENT_MARGIN);
    content.set_hexpand(true);
    content.set_vexpand(true);
    content.append(&canvas);

    let toolbar = adw::ToolbarView::new();
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&content));

    let (surface_width, surface_height) = {
        let st = state.borrow();
        (st.config.surface.width as i32, st.config.surface.height as i32)
    };
    let win = adw::ApplicationWindow::builder()
        .application(app)
        .title(gettext("Memory Match"))
        .icon_name(APP_ID)
        .default_width(surface_width + CONTENT_MARGIN * 2)
        .default_height(surface_height + CONTENT_MARGIN * 2 + 48)
        .content(&toolbar)
        .build();

    let shell = Rc::new(Shell {
        state,
        window: win.clone(),
        canvas: canvas.clone(),
        subtitle,
        restart_button: restart_button.clone(),
    });

    restart_button.connect_clicked({
        let shell = shell.clone();
        move |_| restart_game(&shell)
    });

    let click = gtk::GestureClick::new();
    click.set_button(gdk::BUTTON_PRIMARY);
    click.connect_released({
        let shell = shell.clone();
        move |_, _, x, y| handle_pointer_click(&shell, x, y)
    });
    canvas.add_controller(click);

    let keys = gtk::EventControllerKey::new();
    keys.set_propagation_phase(gtk::PropagationPhase::Capture);
    keys.connect_key_pressed({
        let shell = shell.clone();
        move |_, key, _, mods| handle_key(&shell, key, mods)
    });
    win.add_controller(keys);

    shell.refresh();
    win.present();
}

pub fn run() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let config = GameConfig::from_env();
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        if let Some(win) = app.active_window() {
            win.present();
            return;
        }
        build_window(app, config.clone());
    });

    app.run()
}
