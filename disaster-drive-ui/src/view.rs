//! egui rendering. Reads state, emits [`Message`]s, never mutates the model.

use disaster_drive_core::{AppState, MetricSource, Role};
use egui::{Color32, RichText, Ui};
use tracing::debug;

use crate::app::{DisasterDriveApp, Message};
use crate::profile::ProfileForm;
use crate::style::{self, DARK_GREY, PRIMARY_BLUE, SUB_TEXT, SUCCESS_GREEN, WARNING_ORANGE};
use crate::tab::Tab;
use crate::HEADING;

pub(crate) fn draw<M: MetricSource>(
    ctx: &egui::Context,
    app: &mut DisasterDriveApp<M>,
    out: &mut Vec<Message>,
) {
    let active = app.active_tab();

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(
                RichText::new(HEADING)
                    .size(style::TITLE_SIZE)
                    .strong()
                    .color(DARK_GREY),
            );
            ui.add_space(10.0);
        });
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let label = RichText::new(tab.title()).size(style::HEADER_SIZE);
                if ui.selectable_label(active == tab, label).clicked() {
                    out.push(Message::SwitchTab(tab));
                }
            }
        });
    });

    let status = app.status_line();
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(status).small().italics().color(SUB_TEXT));
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(10.0);
        ui.label(style::header(active.heading()));
        ui.add_space(10.0);

        match active {
            Tab::Backup => backup_page(ui, app.dispatcher().state(), out),
            Tab::Recovery => recovery_page(ui, app.dispatcher().state(), out),
            Tab::Health => health_page(ui, app.dispatcher().state(), out),
            Tab::Profile => profile_page(ui, app.profile_form_mut(), out),
        }
    });
}

fn backup_page(ui: &mut Ui, state: &AppState, out: &mut Vec<Message>) {
    ui.horizontal(|ui| {
        if ui
            .add(style::filled_button("Select Files/Folders", PRIMARY_BLUE))
            .on_hover_text("Pick a file")
            .clicked()
        {
            out.push(Message::SelectFiles(rfd::FileDialog::new().pick_file()));
        }
        if ui
            .add(style::filled_button("Select Folder", PRIMARY_BLUE))
            .clicked()
        {
            out.push(Message::SelectFiles(rfd::FileDialog::new().pick_folder()));
        }
        if ui
            .add(style::filled_button("Initiate Backup", PRIMARY_BLUE))
            .clicked()
        {
            out.push(Message::StartBackup);
        }
    });

    let progress = state.backup().progress_percent();
    ui.add(
        egui::ProgressBar::new(f32::from(progress) / 100.0)
            .text(format!("{}%", progress))
            .fill(SUCCESS_GREEN)
            .desired_width(400.0),
    );

    log_panel(ui, "backup_log", "Backup Log", state.backup().log());
}

fn recovery_page(ui: &mut Ui, state: &AppState, out: &mut Vec<Message>) {
    if ui
        .add(style::filled_button("Simulate Recovery", PRIMARY_BLUE))
        .clicked()
    {
        out.push(Message::SimulateRecovery);
    }
    log_panel(
        ui,
        "recovery_log",
        "Recovery Simulation Log",
        state.recovery().log(),
    );
}

fn health_page(ui: &mut Ui, state: &AppState, out: &mut Vec<Message>) {
    if ui
        .add(style::filled_button("Refresh Health Check", PRIMARY_BLUE))
        .clicked()
    {
        out.push(Message::RefreshHealth);
    }

    for (metric, value) in state.monitoring().metrics().iter() {
        ui.add(
            egui::ProgressBar::new((value / 100.0) as f32)
                .text(format!("{}: {:.0}%", metric.label(), value))
                .fill(SUCCESS_GREEN)
                .desired_width(400.0),
        );
    }

    log_panel(
        ui,
        "monitoring_log",
        "Health Alerts Log",
        state.monitoring().log(),
    );
}

fn profile_page(ui: &mut Ui, form: &mut ProfileForm, out: &mut Vec<Message>) {
    egui::Grid::new("profile_grid")
        .num_columns(2)
        .spacing([10.0, 10.0])
        .show(ui, |ui| {
            ui.label("Username:");
            ui.add(egui::TextEdit::singleline(&mut form.username).desired_width(240.0));
            ui.end_row();

            ui.label("Email:");
            ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(240.0));
            ui.end_row();

            ui.label("Password:");
            ui.add(
                egui::TextEdit::singleline(&mut *form.password)
                    .password(true)
                    .desired_width(240.0),
            );
            ui.end_row();

            ui.label("Role:");
            egui::ComboBox::from_id_salt("profile_role")
                .selected_text(form.role.as_str())
                .show_ui(ui, |ui| {
                    for role in Role::ALL {
                        ui.selectable_value(&mut form.role, role, role.as_str());
                    }
                });
            ui.end_row();

            if ui
                .add(style::filled_button("Save Profile", SUCCESS_GREEN))
                .clicked()
            {
                debug!("Save profile clicked");
                out.push(Message::SaveProfile);
            }
            if ui
                .add(style::filled_button("Load Profile", WARNING_ORANGE))
                .clicked()
            {
                out.push(Message::LoadProfile);
            }
            ui.end_row();
        });
}

fn log_panel(ui: &mut Ui, id: &str, title: &str, lines: &[String]) {
    ui.add_space(10.0);
    ui.group(|ui| {
        ui.label(RichText::new(title).strong().color(DARK_GREY));
        egui::Frame::new()
            .fill(Color32::WHITE)
            .inner_margin(6.0)
            .show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(id)
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for line in lines {
                            ui.label(RichText::new(line.as_str()).small());
                        }
                    });
            });
    });
}
