//! Roomba Viewer - Bevy-based visualization for the simulation
//!
//! Samples the keyboard each fixed tick, advances the simulation at 60 Hz,
//! and draws the current state: charging station, walls, dirt, the agent
//! (color-coded by battery tier), and the HUD text overlays.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use roomba_core::components::{FrameInput, RoomConfig, Vec2 as SimVec2};
use roomba_core::engine::Simulation;
use roomba_core::params::dirt;

fn main() {
    let config = RoomConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Roomba Simulation".to_string(),
                resolution: (config.width, config.height).into(),
                present_mode: bevy::window::PresentMode::AutoVsync,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(colors::FLOOR))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .insert_resource(SimWrapper(Simulation::new(config)))
        .add_systems(Startup, setup)
        .add_systems(FixedUpdate, advance_simulation)
        .add_systems(Update, (render_world, update_hud))
        .run();
}

#[derive(Resource)]
struct SimWrapper(Simulation);

// Marker components for HUD text elements
#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct BatteryText;

#[derive(Component)]
struct DirtText;

#[derive(Component)]
struct ChargingText;

mod colors {
    use bevy::prelude::Color;

    pub const FLOOR: Color = Color::WHITE;
    pub const WALL: Color = Color::srgb(0.5, 0.5, 0.5);
    pub const DIRT: Color = Color::srgb(0.545, 0.271, 0.075);
    pub const STATION: Color = Color::srgb(1.0, 1.0, 0.0);
    pub const HUD: Color = Color::BLACK;
    pub const CHARGING: Color = Color::srgb(0.0, 1.0, 0.0);

    pub const AGENT_PRIMARY: Color = Color::BLACK;
    pub const AGENT_WARNING: Color = Color::srgb(1.0, 1.0, 0.0);
    pub const AGENT_CRITICAL: Color = Color::srgb(1.0, 0.0, 0.0);
}

/// Agent color by battery tier.
fn battery_color(level: u8) -> Color {
    if level > 50 {
        colors::AGENT_PRIMARY
    } else if level > 20 {
        colors::AGENT_WARNING
    } else {
        colors::AGENT_CRITICAL
    }
}

/// Room coordinates (top-left origin, y down) to Bevy world coordinates
/// (center origin, y up).
fn room_to_world(pos: SimVec2, config: &RoomConfig) -> Vec2 {
    Vec2::new(pos.x - config.width / 2.0, config.height / 2.0 - pos.y)
}

fn setup(mut commands: Commands, sim: Res<SimWrapper>) {
    commands.spawn(Camera2d::default());

    let config = sim.0.config;
    let hud_font = TextFont {
        font_size: 24.0,
        ..default()
    };

    // HUD rows run down the top-left corner, matching room coordinates
    // (10, 10), (10, 50), (10, 90), (10, 130).
    let hud_row = |y: f32| {
        Transform::from_xyz(
            10.0 - config.width / 2.0,
            config.height / 2.0 - y,
            10.0,
        )
    };

    commands.spawn((
        Text2d::new("Score: 0"),
        hud_font.clone(),
        TextColor(colors::HUD),
        Anchor::TopLeft,
        hud_row(10.0),
        ScoreText,
    ));

    commands.spawn((
        Text2d::new("Battery: 100%"),
        hud_font.clone(),
        TextColor(colors::HUD),
        Anchor::TopLeft,
        hud_row(50.0),
        BatteryText,
    ));

    commands.spawn((
        Text2d::new("Dirt Remaining: 0"),
        hud_font.clone(),
        TextColor(colors::HUD),
        Anchor::TopLeft,
        hud_row(90.0),
        DirtText,
    ));

    commands.spawn((
        Text2d::new(""),
        hud_font,
        TextColor(colors::CHARGING),
        Anchor::TopLeft,
        hud_row(130.0),
        ChargingText,
    ));

    info!(
        "Room {}x{} with {} walls and {} dirt particles",
        config.width,
        config.height,
        sim.0.walls.len(),
        sim.0.dirt_remaining()
    );
}

fn advance_simulation(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<SimWrapper>,
) {
    let input = FrameInput {
        up: keyboard.pressed(KeyCode::ArrowUp),
        down: keyboard.pressed(KeyCode::ArrowDown),
        left: keyboard.pressed(KeyCode::ArrowLeft),
        right: keyboard.pressed(KeyCode::ArrowRight),
        clean: keyboard.pressed(KeyCode::Space),
    };

    sim.0.update(&input, time.delta_secs());
}

fn render_world(sim: Res<SimWrapper>, mut gizmos: Gizmos) {
    let config = &sim.0.config;

    // Charging station
    let station = sim.0.station.footprint();
    gizmos.rect_2d(
        Isometry2d::from_translation(room_to_world(station.center(), config)),
        Vec2::new(station.width, station.height),
        colors::STATION,
    );

    // Walls
    for wall in &sim.0.walls {
        gizmos.rect_2d(
            Isometry2d::from_translation(room_to_world(wall.center(), config)),
            Vec2::new(wall.width, wall.height),
            colors::WALL,
        );
    }

    // Dirt particles
    for particle in &sim.0.dirt {
        gizmos.circle_2d(
            Isometry2d::from_translation(room_to_world(*particle, config)),
            dirt::RADIUS,
            colors::DIRT,
        );
    }

    // Agent, color-coded by battery tier
    gizmos.circle_2d(
        Isometry2d::from_translation(room_to_world(sim.0.agent.pos, config)),
        sim.0.agent.radius,
        battery_color(sim.0.agent.battery),
    );
}

fn update_hud(
    sim: Res<SimWrapper>,
    mut score_query: Query<
        &mut Text2d,
        (
            With<ScoreText>,
            Without<BatteryText>,
            Without<DirtText>,
            Without<ChargingText>,
        ),
    >,
    mut battery_query: Query<
        &mut Text2d,
        (
            With<BatteryText>,
            Without<ScoreText>,
            Without<DirtText>,
            Without<ChargingText>,
        ),
    >,
    mut dirt_query: Query<
        &mut Text2d,
        (
            With<DirtText>,
            Without<ScoreText>,
            Without<BatteryText>,
            Without<ChargingText>,
        ),
    >,
    mut charging_query: Query<
        &mut Text2d,
        (
            With<ChargingText>,
            Without<ScoreText>,
            Without<BatteryText>,
            Without<DirtText>,
        ),
    >,
) {
    for mut text in &mut score_query {
        **text = format!("Score: {}", sim.0.score);
    }

    for mut text in &mut battery_query {
        **text = format!("Battery: {}%", sim.0.agent.battery);
    }

    for mut text in &mut dirt_query {
        **text = format!("Dirt Remaining: {}", sim.0.dirt_remaining());
    }

    for mut text in &mut charging_query {
        **text = if sim.0.at_station() {
            "CHARGING".to_string()
        } else {
            String::new()
        };
    }
}
