//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. UiTranslation (raw window/input events into UiEvent)
//! 2. UiRouting (UiEvent routed through the active screen's controller)
//! 3. Simulation (spawn scheduling, coin motion, arrivals)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct UiTranslationSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct UiRoutingSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SimulationSet;
