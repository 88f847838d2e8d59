use bevy::prelude::*;

use cityflyer::plugins::{
    AircraftPlugin, CameraPlugin, EnvironmentPlugin, OverlayPlugin, StartupSequencePlugin,
};
use cityflyer::resources::FlightConfig;

const CONFIG_PATH: &str = "config/flight.yaml";

fn main() {
    let config = FlightConfig::load_or_default(CONFIG_PATH);

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "cityflyer".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(StartupSequencePlugin)
        .add_plugins(AircraftPlugin::new(config))
        .add_plugins(CameraPlugin)
        .add_plugins(EnvironmentPlugin)
        .add_plugins(OverlayPlugin)
        .run();
}
