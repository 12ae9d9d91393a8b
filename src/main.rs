use iced::widget::{button, column, container, row, Column};
use iced::{Alignment, Element, Length, Size, Task, Theme};

use kart_randomizer::config::Config;
use kart_randomizer::layout::{Dimensions, SlotMetrics, BOX_PADDING};
use kart_randomizer::logging;
use kart_randomizer::state::{Board, DisplaySlot};
use kart_randomizer::ui::{caption, slot_box, title};

/// Main application state
struct Randomizer {
    /// The four display slots and the current draw
    board: Board,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the Randomize button under character / vehicle
    RandomizeRoster,
    /// User clicked the Randomize button under cup / course
    RandomizeCup,
    /// User clicked Close
    Close,
}

impl Randomizer {
    /// Create the window state and draw an initial roster and cup
    fn new(config: Config) -> (Self, Task<Message>) {
        tracing::info!("🏁 Kart Randomizer using assets in {}", config.asset_root.display());

        let mut board = Board::new(config.asset_root, SlotMetrics::scaled(config.scale));
        let mut rng = rand::thread_rng();
        board.randomize_roster(&mut rng);
        board.randomize_cup(&mut rng);

        (Randomizer { board }, Task::none())
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RandomizeRoster => {
                self.board.randomize_roster(&mut rand::thread_rng());
                Task::none()
            }
            Message::RandomizeCup => {
                self.board.randomize_cup(&mut rand::thread_rng());
                Task::none()
            }
            Message::Close => iced::exit(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let board = &self.board;
        let metrics = board.metrics();
        let gap = BOX_PADDING * 2;

        let roster = column![
            title(board.size_label(), 18),
            row![
                slot_column("Character", &board.character, metrics.character_box, metrics),
                slot_column("Vehicle", &board.vehicle, metrics.vehicle_box, metrics),
            ]
            .spacing(gap),
            button("Randomize")
                .on_press(Message::RandomizeRoster)
                .padding(10),
        ]
        .spacing(BOX_PADDING)
        .align_x(Alignment::Center);

        let caption_width = metrics.cup_box.width + metrics.course_box.width + u32::from(gap);
        let cups = column![
            title("Cup", 18),
            row![
                slot_box(&board.cup, metrics.cup_box),
                slot_box(&board.course, metrics.course_box),
            ]
            .spacing(gap),
            caption(&board.cup_caption, caption_width, metrics.name_row_height),
            button("Randomize")
                .on_press(Message::RandomizeCup)
                .padding(10),
        ]
        .spacing(BOX_PADDING)
        .align_x(Alignment::Center);

        let content: Column<Message> = column![
            // Bottom-aligned so the cup boxes line up with the roster boxes
            row![roster, cups].spacing(gap).align_y(Alignment::End),
            button("Close").on_press(Message::Close).padding(8),
        ]
        .spacing(BOX_PADDING)
        .padding(BOX_PADDING)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Title, box and name label for one slot
fn slot_column<'a>(
    heading: &'static str,
    slot: &'a DisplaySlot,
    bounds: Dimensions,
    metrics: &SlotMetrics,
) -> Element<'a, Message> {
    column![
        title(heading, 16),
        slot_box(slot, bounds),
        caption(slot.name(), bounds.width, metrics.name_row_height),
    ]
    .spacing(BOX_PADDING)
    .align_x(Alignment::Center)
    .into()
}

fn main() -> iced::Result {
    logging::init();

    // A broken config is the only fatal error; asset problems show up in the window
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let window = SlotMetrics::scaled(config.scale).window_size();

    iced::application("Mario Kart Randomizer", Randomizer::update, Randomizer::view)
        .theme(Randomizer::theme)
        .window_size(Size::new(window.width as f32, window.height as f32))
        .centered()
        .run_with(move || Randomizer::new(config))
}
