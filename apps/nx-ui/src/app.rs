use crate::figure_view::FigureView;
use crate::params_panel;
use egui_file_dialog::FileDialog;
use nx_app::ViewSession;
use nx_core::PlotMode;
use nx_io::LoaderRegistry;
use std::path::{Path, PathBuf};

const ABOUT: &str = "NumEx: NumPy-ndarray Explorer.\n\n\
Interactive viewer for N-dimensional real and complex arrays: 1D line \
plots, 2D (x, y) plots and 2D maps of any slice.\n\n\
Released under the GNU General Public License version 3 or later.\n\
This program comes with ABSOLUTELY NO WARRANTY.";

pub struct NumexApp {
    registry: LoaderRegistry,
    session: ViewSession,
    source: Option<PathBuf>,
    figure_view: FigureView,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_directory: Option<PathBuf>,
    show_about: bool,
    confirm_quit: bool,
    allow_close: bool,
    warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Open,
    Import,
    Export,
}

impl NumexApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        registry: LoaderRegistry,
        session: ViewSession,
        source: Option<PathBuf>,
        warning: Option<String>,
    ) -> Self {
        let last_directory = source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        Self {
            registry,
            session,
            source,
            figure_view: FigureView::default(),
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_directory,
            show_about: false,
            confirm_quit: false,
            allow_close: false,
            warning,
        }
    }

    fn window_title(&self) -> String {
        match &self.source {
            Some(path) => format!("NumEx - {}", path.display()),
            None => "NumEx - synthetic data".to_string(),
        }
    }

    fn open_dialog(&mut self, action: FileDialogAction) {
        self.file_dialog_action = Some(action);
        if let Some(dir) = &self.last_directory {
            self.file_dialog = FileDialog::new().initial_directory(dir.clone());
        }
        match action {
            FileDialogAction::Open | FileDialogAction::Import => self.file_dialog.select_file(),
            FileDialogAction::Export => self.file_dialog.save_file(),
        }
    }

    fn handle_selected(&mut self, ctx: &egui::Context, action: FileDialogAction, path: PathBuf) {
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_path_buf());
        }
        match action {
            FileDialogAction::Open => match nx_app::load_array(&self.registry, &path) {
                Ok(array) => {
                    self.session.set_array(array, None);
                    self.source = Some(path);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.window_title()));
                }
                Err(e) => self.warning = Some(format!("Could not open file!\n\n{e}")),
            },
            FileDialogAction::Import => {
                if let Err(e) = self.session.import_json(&path) {
                    self.warning = Some(format!("Could not import data from file!\n\n{e}"));
                }
            }
            FileDialogAction::Export => {
                let path = if path.extension().is_none() {
                    path.with_extension("json")
                } else {
                    path
                };
                if let Err(e) = self.session.export_json(&path) {
                    self.warning = Some(format!("Could not export data to file!\n\n{e}"));
                }
            }
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Menu", |ui| {
                    if ui.button("Open…").clicked() {
                        self.open_dialog(FileDialogAction::Open);
                        ui.close_menu();
                    }
                    if ui.button("Exit").clicked() {
                        self.confirm_quit = true;
                        ui.close_menu();
                    }
                });
                ui.menu_button("Parameters", |ui| {
                    if ui.button("Reset").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Import").clicked() {
                        self.open_dialog(FileDialogAction::Import);
                        ui.close_menu();
                    }
                    if ui.button("Export").clicked() {
                        self.open_dialog(FileDialogAction::Export);
                        ui.close_menu();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });

                ui.separator();
                let mut mode = self.session.mode();
                egui::ComboBox::from_id_salt("plot_mode")
                    .selected_text(mode.title())
                    .show_ui(ui, |ui| {
                        for candidate in PlotMode::ALL {
                            ui.selectable_value(&mut mode, candidate, candidate.title());
                        }
                    });
                if mode != self.session.mode() {
                    self.session.set_mode(mode);
                }
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        egui::Window::new("About")
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(ABOUT);
            });

        if self.confirm_quit {
            egui::Window::new("Quit")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Are you sure you want to quit?");
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            self.allow_close = true;
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                        if ui.button("Cancel").clicked() {
                            self.confirm_quit = false;
                        }
                    });
                });
        }

        let mut dismiss = false;
        if let Some(message) = &self.warning {
            egui::Window::new("Warning")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        dismiss = true;
                    }
                });
        }
        if dismiss {
            self.warning = None;
        }
    }
}

impl eframe::App for NumexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.allow_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.confirm_quit = true;
        }

        self.menu_bar(ctx);

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            if let Some(action) = self.file_dialog_action.take() {
                self.handle_selected(ctx, action, path.to_path_buf());
            }
        }

        egui::SidePanel::right("parameters")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Parameters");
                ui.separator();
                let changes = egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        params_panel::show(ui, self.session.params(), self.session.values())
                    })
                    .inner;
                for (name, value) in changes {
                    self.session.set_value(&name, value);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.figure_view.show(ui, self.session.figure());
        });

        self.dialogs(ctx);
    }
}
