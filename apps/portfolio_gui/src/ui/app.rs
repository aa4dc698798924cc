//! App shell: one scrollable page of portfolio sections plus a fixed top
//! navigation bar, backed by the controller state objects.

use std::collections::HashMap;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use serde::{Deserialize, Serialize};
use shared::content::PortfolioContent;
use shared::domain::{ProjectRecord, SectionId};

use crate::backend_bridge::commands::{BackendCommand, ImageKey};
use crate::controller::carousel::CarouselState;
use crate::controller::events::UiEvent;
use crate::controller::menu::MenuState;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::submission::{ContactFormState, SubmissionStatus, SubmitDecision};
use crate::media::DecodedImage;
use crate::ui::theme::{self, PortfolioPalette};

pub const SETTINGS_STORAGE_KEY: &str = "portfolio_gui_settings";

/// Below this window width the nav collapses into the hamburger menu.
const NARROW_NAV_BREAKPOINT: f32 = 720.0;
const CONTENT_MAX_WIDTH: f32 = 820.0;
const PREVIEW_MAX_HEIGHT: f32 = 260.0;

enum ImageState {
    Loading,
    Ready {
        image: DecodedImage,
        texture: Option<TextureHandle>,
    },
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedUiSettings {
    pub text_scale: f32,
}

impl Default for PersistedUiSettings {
    fn default() -> Self {
        Self { text_scale: 1.0 }
    }
}

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    content: PortfolioContent,
    carousel: CarouselState,
    form: ContactFormState,
    menu: MenuState,
    pending_scroll: Option<SectionId>,

    images: HashMap<ImageKey, ImageState>,

    settings: PersistedUiSettings,
    applied_text_scale: Option<f32>,
    theme_applied: bool,
}

impl PortfolioApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        persisted_settings: Option<PersistedUiSettings>,
    ) -> Self {
        let content = PortfolioContent::builtin();
        let carousel = CarouselState::new(content.projects.len());
        Self {
            cmd_tx,
            ui_rx,
            content,
            carousel,
            form: ContactFormState::default(),
            menu: MenuState::default(),
            pending_scroll: None,
            images: HashMap::new(),
            settings: persisted_settings.unwrap_or_default(),
            applied_text_scale: None,
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    tracing::info!(%message, "backend worker info");
                }
                UiEvent::ContactSendOk => {
                    self.form.resolve_success();
                }
                UiEvent::ContactSendFailed { reason } => {
                    tracing::warn!(%reason, "contact submission failed");
                    self.form.resolve_failure();
                }
                UiEvent::ImageLoaded { key, image } => {
                    self.images.insert(
                        key,
                        ImageState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::ImageLoadFailed { key, reason } => {
                    tracing::warn!(?key, %reason, "image unavailable, showing alt text");
                    self.images.insert(key, ImageState::Error(reason));
                }
            }
        }
    }

    fn submit_contact_form(&mut self) {
        match self.form.begin_submit() {
            SubmitDecision::Dispatch(message) => {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SendContactMessage { message },
                );
                if !queued {
                    self.form.resolve_failure();
                }
            }
            // Dropped, not deferred: the submit control is disabled while a
            // submission is in flight, so this is a keyboard race at worst.
            SubmitDecision::AlreadySubmitting => {}
            // Validation banner is already set by the controller.
            SubmitDecision::Invalid => {}
        }
    }

    fn ensure_image_requested(&mut self, key: ImageKey, path: &str) {
        if self.images.contains_key(&key) {
            return;
        }
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadImage {
                key,
                path: path.to_string(),
            },
        );
        if queued {
            self.images.insert(key, ImageState::Loading);
        }
    }

    fn show_image(&mut self, ui: &mut egui::Ui, key: ImageKey, alt_text: &str, max_height: f32) {
        match self.images.get_mut(&key) {
            Some(ImageState::Ready { image, texture }) => {
                let texture = texture.get_or_insert_with(|| {
                    ui.ctx().load_texture(
                        format!("portfolio_image_{key:?}"),
                        egui::ColorImage::from_rgba_unmultiplied(
                            [image.width, image.height],
                            &image.rgba,
                        ),
                        egui::TextureOptions::LINEAR,
                    )
                });
                let (w, h) = (image.width as f32, image.height as f32);
                let scale = (max_height / h)
                    .min(ui.available_width() / w)
                    .min(1.0)
                    .max(0.01);
                ui.add(
                    egui::Image::new(&*texture).fit_to_exact_size(egui::vec2(w * scale, h * scale)),
                );
            }
            Some(ImageState::Error(_)) => {
                // Broken image reference: alt text only, the card renders on.
                ui.label(egui::RichText::new(alt_text).italics().weak());
            }
            Some(ImageState::Loading) | None => {
                ui.spinner();
            }
        }
    }

    fn apply_appearance(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }
        if self.applied_text_scale != Some(self.settings.text_scale) {
            ctx.set_zoom_factor(self.settings.text_scale);
            self.applied_text_scale = Some(self.settings.text_scale);
        }
    }

    fn navigate_to(&mut self, section: SectionId) {
        self.pending_scroll = Some(self.menu.select_section(section));
    }

    fn top_navigation(&mut self, ctx: &egui::Context, palette: PortfolioPalette) {
        let narrow = ctx.screen_rect().width() < NARROW_NAV_BREAKPOINT;

        egui::TopBottomPanel::top("top_nav")
            .frame(
                egui::Frame::new()
                    .fill(palette.nav_background)
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&self.content.owner_name)
                            .strong()
                            .size(18.0)
                            .color(palette.accent),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("A+").clicked() {
                            self.settings.text_scale =
                                (self.settings.text_scale + 0.1).clamp(0.8, 1.4);
                        }
                        if ui.small_button("A-").clicked() {
                            self.settings.text_scale =
                                (self.settings.text_scale - 0.1).clamp(0.8, 1.4);
                        }

                        if narrow {
                            let icon = if self.menu.is_open() { "X" } else { "=" };
                            if ui.button(icon).clicked() {
                                self.menu.toggle();
                            }
                        } else {
                            for section in SectionId::ALL.into_iter().rev() {
                                if ui.button(section.label()).clicked() {
                                    self.navigate_to(section);
                                }
                            }
                        }
                    });
                });

                if narrow && self.menu.is_open() {
                    ui.separator();
                    ui.vertical(|ui| {
                        for section in SectionId::ALL {
                            if ui.button(section.label()).clicked() {
                                self.navigate_to(section);
                            }
                        }
                    });
                }
            });
    }

    fn section_heading(&mut self, ui: &mut egui::Ui, section: SectionId, palette: PortfolioPalette) {
        ui.add_space(24.0);
        let title = match section {
            SectionId::About => "About Me",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Featured Projects",
            SectionId::Contact => "Contact Me",
        };
        let response = ui.heading(
            egui::RichText::new(title)
                .size(28.0)
                .color(palette.text_primary),
        );
        if self.pending_scroll == Some(section) {
            response.scroll_to_me(Some(egui::Align::Min));
            self.pending_scroll = None;
        }
        ui.add_space(8.0);
    }

    fn card_frame(palette: PortfolioPalette) -> egui::Frame {
        egui::Frame::new()
            .fill(palette.card_background)
            .stroke(egui::Stroke::new(1.0, palette.card_border))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(16))
    }

    fn about_section(&mut self, ui: &mut egui::Ui, palette: PortfolioPalette) {
        self.section_heading(ui, SectionId::About, palette);

        let profile_path = self.content.profile_image.clone();
        self.ensure_image_requested(ImageKey::Profile, &profile_path);

        let owner_name = self.content.owner_name.clone();
        Self::card_frame(palette).show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    self.show_image(ui, ImageKey::Profile, &owner_name, 180.0);
                });
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&self.content.greeting)
                            .color(palette.accent)
                            .size(16.0),
                    );
                    ui.label(
                        egui::RichText::new(&self.content.owner_name)
                            .strong()
                            .size(32.0),
                    );
                    ui.label(
                        egui::RichText::new(&self.content.role_line)
                            .color(palette.accent)
                            .size(20.0),
                    );
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(&self.content.biography).size(15.0));
                });
            });

            ui.add_space(12.0);
            let highlights = self.content.highlights.clone();
            ui.columns(highlights.len(), |columns| {
                for (column, highlight) in columns.iter_mut().zip(&highlights) {
                    column.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(&highlight.icon).size(22.0));
                        ui.label(
                            egui::RichText::new(&highlight.figure)
                                .strong()
                                .size(22.0)
                                .color(palette.accent),
                        );
                        ui.label(egui::RichText::new(&highlight.label).color(palette.text_muted));
                    });
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Contact Me").color(palette.text_primary))
                    .clicked()
                {
                    self.navigate_to(SectionId::Contact);
                }
                if ui.button("View Projects").clicked() {
                    self.navigate_to(SectionId::Projects);
                }
                ui.hyperlink_to("GitHub", &self.content.github_url);
            });
        });
    }

    fn skills_section(&mut self, ui: &mut egui::Ui, palette: PortfolioPalette) {
        self.section_heading(ui, SectionId::Skills, palette);
        ui.label(
            egui::RichText::new("My expertise across different areas").color(palette.text_muted),
        );
        ui.add_space(8.0);

        let categories = self.content.skill_categories.clone();
        ui.columns(categories.len(), |columns| {
            for (column, category) in columns.iter_mut().zip(&categories) {
                Self::card_frame(palette).show(column, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&category.icon).size(20.0));
                        ui.label(
                            egui::RichText::new(&category.title)
                                .strong()
                                .color(palette.accent),
                        );
                    });
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        for skill in &category.skills {
                            skill_badge(ui, skill, palette);
                        }
                    });
                });
            }
        });
    }

    fn projects_section(&mut self, ui: &mut egui::Ui, palette: PortfolioPalette) {
        self.section_heading(ui, SectionId::Projects, palette);
        ui.label(
            egui::RichText::new("Explore my recent work and projects").color(palette.text_muted),
        );
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            if ui.button(egui::RichText::new("<").size(18.0)).clicked() {
                self.carousel.previous();
            }
            let index = self.carousel.index();
            let project = self.content.projects[index].clone();
            let card_width = (ui.available_width() - 48.0).max(200.0);
            ui.vertical(|ui| {
                ui.set_max_width(card_width);
                self.project_card(ui, index, &project, palette);
            });
            if ui.button(egui::RichText::new(">").size(18.0)).clicked() {
                self.carousel.next();
            }
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for dot in 0..self.carousel.len() {
                let active = dot == self.carousel.index();
                let marker = egui::RichText::new("o").size(if active { 16.0 } else { 12.0 }).color(
                    if active {
                        palette.accent
                    } else {
                        palette.card_border
                    },
                );
                if ui.selectable_label(active, marker).clicked() {
                    self.carousel.go_to(dot);
                }
            }
        });
    }

    fn project_card(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        project: &ProjectRecord,
        palette: PortfolioPalette,
    ) {
        let key = ImageKey::ProjectPreview(index);
        self.ensure_image_requested(key, &project.preview_image);

        Self::card_frame(palette).show(ui, |ui| {
            self.show_image(ui, key, &project.title, PREVIEW_MAX_HEIGHT);
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&project.title)
                    .strong()
                    .size(20.0)
                    .color(palette.accent),
            );
            ui.add_space(4.0);
            ui.label(egui::RichText::new(&project.description).size(14.0));
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for tech in &project.tech_stack {
                    skill_badge(ui, tech, palette);
                }
            });
            ui.add_space(8.0);
            ui.hyperlink_to(
                egui::RichText::new("View on GitHub").color(palette.accent),
                &project.link,
            );
        });
    }

    fn contact_section(&mut self, ui: &mut egui::Ui, palette: PortfolioPalette) {
        self.section_heading(ui, SectionId::Contact, palette);
        ui.label(
            egui::RichText::new("Have a question or want to work together? Feel free to reach out!")
                .color(palette.text_muted),
        );
        ui.add_space(8.0);

        Self::card_frame(palette).show(ui, |ui| {
            self.submission_banner(ui, palette);

            ui.label(egui::RichText::new("Name").color(palette.accent));
            let name_edit = ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .hint_text("Your name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            ui.label(egui::RichText::new("Email").color(palette.accent));
            let email_edit = ui.add(
                egui::TextEdit::singleline(&mut self.form.email)
                    .hint_text("your.email@example.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);

            ui.label(egui::RichText::new("Message").color(palette.accent));
            let message_edit = ui.add(
                egui::TextEdit::multiline(&mut self.form.message)
                    .hint_text("Your message here...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );

            if name_edit.changed() || email_edit.changed() || message_edit.changed() {
                self.form.note_field_edited();
            }

            ui.add_space(10.0);
            let submitting = self.form.is_submitting();
            let submit_label = if submitting { "Sending..." } else { "Send Message" };
            let submit = ui.add_enabled(
                !submitting,
                egui::Button::new(egui::RichText::new(submit_label).color(palette.text_primary))
                    .fill(palette.accent_strong),
            );
            if submit.clicked() {
                self.submit_contact_form();
            }
        });

        ui.add_space(16.0);
        let channels = self.content.contact_channels.clone();
        ui.columns(channels.len(), |columns| {
            for (column, channel) in columns.iter_mut().zip(&channels) {
                Self::card_frame(palette).show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(&channel.icon).size(20.0));
                        ui.label(
                            egui::RichText::new(&channel.title)
                                .strong()
                                .color(palette.accent),
                        );
                        ui.label(egui::RichText::new(&channel.value).color(palette.text_muted));
                    });
                });
            }
        });
    }

    fn submission_banner(&self, ui: &mut egui::Ui, palette: PortfolioPalette) {
        let (text, color) = match self.form.status() {
            SubmissionStatus::Success(message) => (message.clone(), palette.success),
            SubmissionStatus::Failure(message) => (message.clone(), palette.failure),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => return,
        };
        egui::Frame::new()
            .stroke(egui::Stroke::new(1.0, color))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(text).color(color));
            });
        ui.add_space(8.0);
    }
}

fn skill_badge(ui: &mut egui::Ui, text: &str, palette: PortfolioPalette) {
    egui::Frame::new()
        .fill(palette.card_border)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(palette.text_primary));
        });
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_appearance(ctx);

        let palette = theme::palette();
        self.top_navigation(ctx, palette);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.app_background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(CONTENT_MAX_WIDTH.min(ui.available_width()));
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                self.about_section(ui, palette);
                                self.skills_section(ui, palette);
                                self.projects_section(ui, palette);
                                self.contact_section(ui, palette);
                                ui.add_space(32.0);
                            });
                        });
                    });
            });

        // Unknown targets fall through unscrolled; clear instead of retrying
        // forever.
        self.pending_scroll = None;

        let waiting_on_backend = self.form.is_submitting()
            || self
                .images
                .values()
                .any(|state| matches!(state, ImageState::Loading));
        if waiting_on_backend {
            ctx.request_repaint_after(Duration::from_millis(120));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.settings) {
            storage.set_string(SETTINGS_STORAGE_KEY, serialized);
        }
    }
}
