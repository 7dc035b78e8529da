// ABOUTME: Shared constants and defaults for Kiosk
// ABOUTME: Centralized definitions used across the workspace packages

pub mod constants;
