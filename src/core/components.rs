use bevy::prelude::*;

/// Marker component identifying a falling coin entity.
#[derive(Component)]
pub struct Coin;

/// Downward speed in px/s, fixed at spawn from config.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct FallSpeed(pub f32);

/// Marker for the bank sprite at the bottom of the screen.
#[derive(Component)]
pub struct Bank;
