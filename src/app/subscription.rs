// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes always flow in. The carousel timer lives exactly as long as
//! the carousel, the frame tick only runs while something is animating, and
//! the typing tick follows the typewriter's current pace.

use super::Message;
use crate::ui::animation::Typewriter;
use crate::ui::carousel::Carousel;
use crate::ui::design_tokens::motion;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window resize events to the app.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Testimonial timer, absent when there is no carousel.
pub fn create_carousel_subscription(carousel: Option<&Carousel>, interval: Duration) -> Subscription<Message> {
    match carousel {
        Some(_) => Carousel::subscription(interval).map(Message::Carousel),
        None => Subscription::none(),
    }
}

/// Frame tick for scroll, reveal and fade animations.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(motion::FRAME).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Tick that types or deletes one character of the hero headline.
pub fn create_typing_subscription(typewriter: &Typewriter) -> Subscription<Message> {
    time::every(typewriter.step_interval()).map(Message::TypingTick)
}
