use crate::network::MindSpace;
use crate::plugin::SurfaceSize;
use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

#[derive(Component)]
pub struct MainCamera;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera, Transform::from_xyz(0.0, 0.0, 0.0)));
}

/// System to keep [`SurfaceSize`] in step with the primary window
pub fn sync_surface_size(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut surface: ResMut<SurfaceSize>,
) {
    if let Ok(window) = windows.get_single() {
        let size = window.size();
        if surface.0 != size {
            surface.0 = size;
        }
    }
}

/// Maps surface space (origin top-left, y down) to world space (origin centre, y up)
pub fn surface_to_world(position: Vec2, surface: Vec2) -> Vec2 {
    Vec2::new(position.x - surface.x * 0.5, surface.y * 0.5 - position.y)
}

/// System to draw connections and nodes
pub fn draw_network(mut gizmos: Gizmos, mind_space: Res<MindSpace>, surface: Res<SurfaceSize>) {
    let nodes = mind_space.nodes();

    for connection in mind_space.connections() {
        let (Some(from), Some(to)) = (nodes.get(connection.from), nodes.get(connection.to)) else {
            continue;
        };
        gizmos.line_2d(
            surface_to_world(from.position, surface.0),
            surface_to_world(to.position, surface.0),
            Color::srgba(0.4, 0.7, 1.0, 0.15 + connection.strength * 0.45),
        );
    }

    for node in nodes {
        // Brighter and more opaque as activity rises
        let color = Color::srgba(
            0.5 + node.activity * 0.5,
            0.6,
            1.0,
            0.4 + node.activity * 0.6,
        );
        gizmos.circle_2d(
            Isometry2d::from_translation(surface_to_world(node.position, surface.0)),
            node.radius,
            color,
        );
    }
}
