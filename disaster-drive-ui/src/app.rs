use chrono::Local;
use disaster_drive_core::{
    EventDispatcher, MetricSource, RandomMetrics, Result, SimulatedClock,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::profile::ProfileForm;
use crate::status;
use crate::tab::Tab;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Picker result; `None` when the dialog was cancelled.
    SelectFiles(Option<PathBuf>),
    StartBackup,
    SimulateRecovery,
    RefreshHealth,
    SaveProfile,
    LoadProfile,
    SwitchTab(Tab),
}

pub struct DisasterDriveApp<M = RandomMetrics> {
    dispatcher: EventDispatcher<M>,
    active_tab: Tab,
    profile_form: ProfileForm,
    last_frame: Option<Instant>,
}

impl DisasterDriveApp<RandomMetrics> {
    pub fn new(tick_interval: Duration) -> Result<Self> {
        Ok(Self::with_dispatcher(EventDispatcher::with_interval(
            tick_interval,
        )?))
    }
}

impl<M: MetricSource> DisasterDriveApp<M> {
    /// Wraps an existing dispatcher and performs the start-up profile load
    /// and metrics refresh the window shows on first paint, in that order.
    pub fn with_dispatcher(mut dispatcher: EventDispatcher<M>) -> Self {
        let profile = dispatcher.load_profile();
        dispatcher.refresh_monitoring();

        Self {
            dispatcher,
            active_tab: Tab::default(),
            profile_form: ProfileForm::from_profile(&profile),
            last_frame: None,
        }
    }

    pub fn with_metrics(clock: SimulatedClock, metrics: M) -> Self {
        Self::with_dispatcher(EventDispatcher::with_parts(clock, metrics))
    }

    pub fn dispatcher(&self) -> &EventDispatcher<M> {
        &self.dispatcher
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn profile_form(&self) -> &ProfileForm {
        &self.profile_form
    }

    pub fn profile_form_mut(&mut self) -> &mut ProfileForm {
        &mut self.profile_form
    }

    pub fn status_line(&self) -> String {
        status::status_line(self.dispatcher.state().backup(), self.dispatcher.clock())
    }

    pub fn update(&mut self, message: Message) {
        debug!(?message, "UI message");
        match message {
            Message::SelectFiles(selection) => {
                self.dispatcher.select_file(selection.as_deref());
            }
            Message::StartBackup => {
                self.dispatcher.start_backup();
            }
            Message::SimulateRecovery => {
                self.dispatcher.simulate_recovery();
            }
            Message::RefreshHealth => {
                self.dispatcher.refresh_monitoring();
            }
            Message::SaveProfile => {
                let form = &self.profile_form;
                self.dispatcher
                    .save_profile(form.username.clone(), form.email.clone(), form.role);
            }
            Message::LoadProfile => {
                let profile = self.dispatcher.load_profile();
                self.profile_form.populate(&profile);
            }
            Message::SwitchTab(tab) => {
                if tab != self.active_tab {
                    self.active_tab = tab;
                    self.dispatcher.on_tab_changed(tab.title(), Local::now());
                }
            }
        }
    }

    /// Feeds wall time since the previous frame into the backup clock and
    /// returns how long the caller may wait before the next tick is due.
    pub fn on_frame(&mut self, now: Instant) -> Option<Duration> {
        if let Some(previous) = self.last_frame {
            self.dispatcher.advance(now.saturating_duration_since(previous));
        }
        self.last_frame = Some(now);
        self.dispatcher.clock().until_next_tick()
    }
}

#[cfg(feature = "gui")]
impl<M: MetricSource> eframe::App for DisasterDriveApp<M> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let next_tick = self.on_frame(Instant::now());

        let mut messages = Vec::new();
        crate::view::draw(ctx, self, &mut messages);
        for message in messages {
            self.update(message);
        }

        if let Some(wait) = next_tick {
            ctx.request_repaint_after(wait);
        }
    }
}
