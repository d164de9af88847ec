use std::sync::Arc;
use std::time::Instant;

use iced::widget::{button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Color, Element, Length, Task};

use crate::app_theme;
use crate::core::interfaces::adapters::OcrBackend;
use crate::core::models::{
    format_elapsed_seconds, ExtractError, ExtractErrorKind, ExtractionOutcome, OcrModel,
    RequestStatus, SelectedImage,
};
use crate::global_constants;
use crate::user_settings::{ThemeMode, UserSettings};

/// Owns every piece of mutable state in the application and funnels all
/// events through one `update` entry point. Network and dialog I/O run in
/// `Task` futures that resolve back into messages.
pub struct ExtractionOrchestrator {
    backend: Arc<dyn OcrBackend>,
    settings: UserSettings,
    selected_image: Option<SelectedImage>,
    preview: Option<iced::widget::image::Handle>,
    model: OcrModel,
    status: RequestStatus,
    result_text: String,
    editable_text: String,
    elapsed_seconds: Option<String>,
    last_error: Option<ExtractErrorKind>,
    request_seq: u64,
    show_toast: bool,
}

#[derive(Clone)]
pub enum ExtractorMessage {
    OpenImagePicker,
    ImagePicked(Option<SelectedImage>),
    ClearImage,
    ModelSelected(OcrModel),
    Extract,
    ExtractFinished(u64, Result<ExtractionOutcome, ExtractError>),
    EditableChanged(String),
    CopyEditableText,
    HideToast,
    ToggleTheme,
    NoticeDismissed,
}

impl std::fmt::Debug for ExtractorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractorMessage::OpenImagePicker => write!(f, "OpenImagePicker"),
            ExtractorMessage::ImagePicked(Some(image)) => write!(f, "ImagePicked({:?})", image),
            ExtractorMessage::ImagePicked(None) => write!(f, "ImagePicked(None)"),
            ExtractorMessage::ClearImage => write!(f, "ClearImage"),
            ExtractorMessage::ModelSelected(model) => write!(f, "ModelSelected({})", model),
            ExtractorMessage::Extract => write!(f, "Extract"),
            ExtractorMessage::ExtractFinished(seq, result) => {
                write!(f, "ExtractFinished(seq={}, ok={})", seq, result.is_ok())
            }
            ExtractorMessage::EditableChanged(s) => write!(f, "EditableChanged({} chars)", s.len()),
            ExtractorMessage::CopyEditableText => write!(f, "CopyEditableText"),
            ExtractorMessage::HideToast => write!(f, "HideToast"),
            ExtractorMessage::ToggleTheme => write!(f, "ToggleTheme"),
            ExtractorMessage::NoticeDismissed => write!(f, "NoticeDismissed"),
        }
    }
}

impl ExtractionOrchestrator {
    pub fn build(backend: Arc<dyn OcrBackend>, settings: UserSettings) -> Self {
        Self {
            backend,
            settings,
            selected_image: None,
            preview: None,
            model: OcrModel::default(),
            status: RequestStatus::Idle,
            result_text: String::new(),
            editable_text: String::new(),
            elapsed_seconds: None,
            last_error: None,
            request_seq: 0,
            show_toast: false,
        }
    }

    pub fn theme_mode(&self) -> &ThemeMode {
        &self.settings.theme_mode
    }

    pub fn update(&mut self, message: ExtractorMessage) -> Task<ExtractorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            ExtractorMessage::OpenImagePicker => self.handle_open_image_picker(),
            ExtractorMessage::ImagePicked(picked) => self.handle_image_picked(picked),
            ExtractorMessage::ClearImage => {
                self.selected_image = None;
                self.preview = None;
                Task::none()
            }
            ExtractorMessage::ModelSelected(model) => {
                self.model = model;
                Task::none()
            }
            ExtractorMessage::Extract => self.handle_extract(),
            ExtractorMessage::ExtractFinished(seq, result) => {
                self.handle_extract_finished(seq, result)
            }
            ExtractorMessage::EditableChanged(new_value) => {
                self.editable_text = new_value;
                Task::none()
            }
            ExtractorMessage::CopyEditableText => self.handle_copy_editable_text(),
            ExtractorMessage::HideToast => {
                self.show_toast = false;
                Task::none()
            }
            ExtractorMessage::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                if let Err(e) = self.settings.save() {
                    log::error!("[ORCHESTRATOR] Failed to save theme setting: {}", e);
                }
                Task::none()
            }
            ExtractorMessage::NoticeDismissed => Task::none(),
        }
    }

    fn handle_open_image_picker(&mut self) -> Task<ExtractorMessage> {
        log::debug!("[ORCHESTRATOR] Opening image picker dialog");

        Task::future(async {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Choose an image")
                .add_filter(
                    global_constants::IMAGE_FILE_FILTER_NAME,
                    global_constants::IMAGE_FILE_EXTENSIONS,
                )
                .pick_file()
                .await;

            match picked {
                Some(handle) => {
                    let file_name = handle.file_name();
                    let bytes = handle.read().await;
                    ExtractorMessage::ImagePicked(Some(SelectedImage::new(file_name, bytes)))
                }
                None => ExtractorMessage::ImagePicked(None),
            }
        })
    }

    fn handle_image_picked(&mut self, picked: Option<SelectedImage>) -> Task<ExtractorMessage> {
        // Cancelling the dialog keeps the previous selection.
        let Some(image) = picked else {
            log::debug!("[ORCHESTRATOR] Image picker dismissed without a selection");
            return Task::none();
        };

        match ::image::load_from_memory(&image.bytes) {
            Ok(decoded) => log::info!(
                "[ORCHESTRATOR] Selected {} ({}x{}, {} bytes)",
                image.file_name,
                decoded.width(),
                decoded.height(),
                image.byte_len()
            ),
            Err(e) => log::warn!(
                "[ORCHESTRATOR] Selected {} but could not decode it locally: {}",
                image.file_name,
                e
            ),
        }

        self.preview = Some(iced::widget::image::Handle::from_bytes(
            image.bytes.to_vec(),
        ));
        self.selected_image = Some(image);
        Task::none()
    }

    fn handle_extract(&mut self) -> Task<ExtractorMessage> {
        let Some(image) = self.selected_image.clone() else {
            log::warn!("[ORCHESTRATOR] Extract triggered with no image selected");
            self.last_error = Some(ExtractErrorKind::MissingInput);

            return Task::future(async {
                rfd::AsyncMessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title(global_constants::APPLICATION_TITLE)
                    .set_description(global_constants::MISSING_IMAGE_NOTICE)
                    .show()
                    .await;
                ExtractorMessage::NoticeDismissed
            });
        };

        self.status = RequestStatus::InFlight;
        self.result_text.clear();
        self.editable_text.clear();
        self.elapsed_seconds = None;
        self.last_error = None;
        self.request_seq += 1;

        let seq = self.request_seq;
        let model = self.model;
        let backend = Arc::clone(&self.backend);

        log::info!(
            "[ORCHESTRATOR] Starting extraction #{} with model {}",
            seq,
            model
        );

        Task::future(async move {
            let result = run_extraction(backend, image, model).await;
            ExtractorMessage::ExtractFinished(seq, result)
        })
    }

    fn handle_extract_finished(
        &mut self,
        seq: u64,
        result: Result<ExtractionOutcome, ExtractError>,
    ) -> Task<ExtractorMessage> {
        if seq != self.request_seq {
            log::debug!(
                "[ORCHESTRATOR] Discarding stale response #{} (current is #{})",
                seq,
                self.request_seq
            );
            return Task::none();
        }

        self.status = RequestStatus::Completed;

        match result {
            Ok(outcome) => {
                let elapsed = format_elapsed_seconds(outcome.elapsed);
                log::info!(
                    "[ORCHESTRATOR] Extraction #{} completed in {}s ({} chars)",
                    seq,
                    elapsed,
                    outcome.text.len()
                );
                self.elapsed_seconds = Some(elapsed);
                self.result_text = outcome.text.clone();
                self.editable_text = outcome.text;
                self.last_error = None;
            }
            Err(error) => {
                log::error!("[ORCHESTRATOR] Extraction #{} failed: {}", seq, error);
                let rendered = error.render_for_display();
                self.result_text = rendered.clone();
                self.editable_text = rendered;
                self.last_error = Some(error.kind());
            }
        }

        Task::none()
    }

    fn handle_copy_editable_text(&mut self) -> Task<ExtractorMessage> {
        if self.editable_text.is_empty() {
            return Task::none();
        }

        if let Err(e) = arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(&self.editable_text))
        {
            log::error!("[ORCHESTRATOR] Failed to copy to clipboard: {}", e);
            return Task::none();
        }

        log::info!("[ORCHESTRATOR] Text copied to clipboard");
        self.show_toast = true;

        Task::future(async {
            tokio::time::sleep(std::time::Duration::from_millis(
                global_constants::TOAST_VISIBLE_MILLIS,
            ))
            .await;
            ExtractorMessage::HideToast
        })
    }

    pub fn render_view(&self) -> Element<'_, ExtractorMessage> {
        let theme = app_theme::get_theme(&self.settings.theme_mode);

        let theme_label = match self.settings.theme_mode {
            ThemeMode::Dark => "☀ Light",
            ThemeMode::Light => "🌙 Dark",
        };
        let navbar = row![
            text(global_constants::APPLICATION_TITLE)
                .size(24)
                .width(Length::Fill),
            button(text(theme_label))
                .padding([6, 12])
                .on_press(ExtractorMessage::ToggleTheme),
        ]
        .align_y(Alignment::Center);

        let mut content = column![
            navbar,
            row![self.render_selection_panel(), self.render_result_panel()]
                .spacing(20)
                .height(Length::FillPortion(3)),
            self.render_editable_section(),
        ]
        .spacing(16)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill);

        if self.show_toast {
            content = content.push(
                container(render_toast())
                    .width(Length::Fill)
                    .align_x(Alignment::Center),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn render_selection_panel(&self) -> Element<'_, ExtractorMessage> {
        let pick_btn = button(text("📂 Choose Image"))
            .padding([10, 20])
            .style(app_theme::purple_button_style)
            .on_press(ExtractorMessage::OpenImagePicker);

        let mut panel = column![pick_btn].spacing(12).width(Length::FillPortion(2));

        match &self.selected_image {
            Some(image) => {
                panel = panel.push(
                    row![
                        text(&image.file_name).width(Length::Fill),
                        button(text("✖"))
                            .padding([4, 10])
                            .style(app_theme::danger_button_style)
                            .on_press(ExtractorMessage::ClearImage),
                    ]
                    .spacing(8)
                    .align_y(Alignment::Center),
                );
                if let Some(preview) = &self.preview {
                    panel = panel.push(
                        iced::widget::image(preview.clone())
                            .width(Length::Fill)
                            .height(Length::Fixed(180.0)),
                    );
                }
            }
            None => {
                panel = panel.push(text("No image selected").size(14));
            }
        }

        panel = panel.push(
            pick_list(
                &OcrModel::ALL[..],
                Some(self.model),
                ExtractorMessage::ModelSelected,
            )
            .width(Length::Fill),
        );

        let extracting = !self.status.allows_new_request();
        let mut extract_btn = button(text(if extracting { "Extracting..." } else { "Extract" }))
            .padding([12, 24])
            .style(app_theme::primary_button_style);
        if !extracting {
            extract_btn = extract_btn.on_press(ExtractorMessage::Extract);
        }
        panel = panel.push(extract_btn);

        if let Some(elapsed) = &self.elapsed_seconds {
            panel = panel.push(text(format!("⏱ Time Taken: {}s", elapsed)).size(14));
        }

        panel.into()
    }

    fn render_result_panel(&self) -> Element<'_, ExtractorMessage> {
        column![
            text("Extracted Text (Read-only)").size(14),
            container(scrollable(text(&self.result_text).width(Length::Fill)))
                .padding(10)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(8)
        .width(Length::FillPortion(3))
        .into()
    }

    fn render_editable_section(&self) -> Element<'_, ExtractorMessage> {
        let mut copy_btn = button(text("📋 Copy"))
            .padding([8, 16])
            .style(app_theme::purple_button_style);
        if !self.editable_text.is_empty() {
            copy_btn = copy_btn.on_press(ExtractorMessage::CopyEditableText);
        }

        column![
            text("Edit Extracted Text").size(14),
            row![
                text_input("Recognized text appears here", &self.editable_text)
                    .on_input(ExtractorMessage::EditableChanged)
                    .padding(10)
                    .width(Length::Fill),
                copy_btn,
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        ]
        .spacing(8)
        .into()
    }
}

async fn run_extraction(
    backend: Arc<dyn OcrBackend>,
    image: SelectedImage,
    model: OcrModel,
) -> Result<ExtractionOutcome, ExtractError> {
    let started = Instant::now();
    let text = backend.extract_text(&image, model).await?;
    Ok(ExtractionOutcome {
        text,
        elapsed: started.elapsed(),
    })
}

fn render_toast<'a>() -> Element<'a, ExtractorMessage> {
    container(text("✓ Text copied to clipboard").size(16).style(|_theme| {
        iced::widget::text::Style {
            color: Some(Color::WHITE),
        }
    }))
    .padding(12)
    .style(|_theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(Color::from_rgb(0.098, 0.529, 0.329))),
        text_color: Some(Color::WHITE),
        border: iced::Border {
            color: Color::from_rgb(0.122, 0.655, 0.408),
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
    .into()
}
