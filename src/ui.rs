use crate::animation::AnimationLoop;
use crate::evolution::{Evolution, Interaction};
use crate::network::MindSpace;
use crate::notify::Notifications;
use crate::plugin::{ResetNetwork, XpGranted};
use crate::render::{draw_network, setup_camera, sync_surface_size};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Camera, drawing and egui panels. Needs a window and `EguiPlugin`.
pub struct CompanionUiPlugin;

impl Plugin for CompanionUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, (setup_camera, sync_surface_size))
            .add_systems(PreUpdate, sync_surface_size)
            .add_systems(Update, (draw_network, ui_system));
    }
}

fn ui_system(
    mut contexts: EguiContexts,
    evolution: Res<Evolution>,
    mind_space: Res<MindSpace>,
    mut animation: ResMut<AnimationLoop>,
    notifications: Res<Notifications>,
    mut grants: EventWriter<XpGranted>,
    mut resets: EventWriter<ResetNetwork>,
) {
    egui::Window::new("Evolution")
        .default_pos(egui::pos2(10.0, 10.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(format!("Level {}", evolution.level()));

            let progress_text = if evolution.is_max_level() {
                format!("{} XP (max level)", evolution.xp())
            } else {
                format!("{} / {} XP", evolution.xp(), evolution.required_xp())
            };
            let progress_bar = egui::ProgressBar::new(evolution.progress_fraction()).text(progress_text);
            ui.add(progress_bar);

            ui.separator();
            ui.label("Interact:");
            ui.horizontal(|ui| {
                for interaction in Interaction::ALL {
                    let text = format!("{} +{}", interaction.label(), interaction.reward());
                    if ui.button(text).clicked() {
                        grants.send(XpGranted::from(interaction));
                    }
                }
            });

            ui.separator();
            ui.label("Milestones:");
            if evolution.milestones().is_empty() {
                ui.colored_label(egui::Color32::GRAY, "  (none yet)");
            } else {
                for (level, name) in evolution.milestones() {
                    ui.label(format!("  Lv {}: {}", level, name));
                }
            }
        });

    egui::Window::new("MindSpace")
        .default_pos(egui::pos2(10.0, 260.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                let button_text = if animation.is_running() { "⏸ Stop" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if animation.is_running() {
                        animation.stop();
                    } else {
                        animation.start();
                    }
                }

                if ui.button("Reset").clicked() {
                    resets.send(ResetNetwork);
                }
            });

            ui.separator();
            let stats = mind_space.stats();
            ui.label(format!("Nodes: {}", mind_space.nodes().len()));
            ui.label(format!("Active Nodes: {}", stats.active_nodes));
            ui.label(format!("Connections: {}", stats.connections));
            ui.label(format!("Mean Activity: {:.0}%", stats.mean_activity_percent));
        });

    if !notifications.is_empty() {
        egui::Window::new("Notifications")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
            .show(contexts.ctx_mut(), |ui| {
                for toast in notifications.iter() {
                    ui.label(toast.message.as_str());
                }
            });
    }
}
