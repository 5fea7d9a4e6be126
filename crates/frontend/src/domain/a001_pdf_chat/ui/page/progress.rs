//! PDF Chat - имитация прогресса загрузки
//!
//! Процент не связан с реально переданными байтами: это только темп анимации.
//! Состояние видит лишь отдельные тики, поэтому источник тиков можно заменить
//! настоящими событиями прогресса без изменений в `state.rs`.

use gloo_timers::future::TimeoutFuture;
use std::ops::ControlFlow;

pub const PROGRESS_COMPLETE: f64 = 100.0;
pub const DEFAULT_MAX_INCREMENT: f64 = 15.0;

/// Результат одного шага прогресса
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProgressStep {
    Advanced(f64),
    /// Достигнуто ровно 100%
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UploadProgress {
    value: f64,
    max_increment: f64,
}

impl UploadProgress {
    pub fn new(max_increment: f64) -> Self {
        let max_increment = if max_increment > 0.0 && max_increment.is_finite() {
            max_increment
        } else {
            DEFAULT_MAX_INCREMENT
        };
        Self {
            value: 0.0,
            max_increment,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max_increment(&self) -> f64 {
        self.max_increment
    }

    /// Подпись для индикатора, округлённая до целого ("42%")
    pub fn percent_label(&self) -> String {
        format!("{}%", self.value.round() as u32)
    }

    pub fn is_complete(&self) -> bool {
        self.value >= PROGRESS_COMPLETE
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Прибавить шаг; шаг ограничивается диапазоном `[0, max_increment]`
    pub fn advance(&mut self, increment: f64) -> ProgressStep {
        let step = if increment.is_finite() {
            increment.clamp(0.0, self.max_increment)
        } else {
            0.0
        };
        self.value += step;
        if self.value >= PROGRESS_COMPLETE {
            self.value = PROGRESS_COMPLETE;
            ProgressStep::Completed
        } else {
            ProgressStep::Advanced(self.value)
        }
    }
}

impl Default for UploadProgress {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INCREMENT)
    }
}

/// Источник величины следующего шага
pub trait IncrementSource {
    fn next_increment(&mut self, max_increment: f64) -> f64;
}

/// Случайный шаг `0..max_increment` через `Math.random()` браузера
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIncrements;

impl IncrementSource for RandomIncrements {
    fn next_increment(&mut self, max_increment: f64) -> f64 {
        js_sys::Math::random() * max_increment
    }
}

/// Тикер: каждые `interval_ms` берёт шаг из `source` и отдаёт его в `on_tick`,
/// пока тот не вернёт `Break`.
pub async fn drive_ticks<S, B>(
    interval_ms: u32,
    max_increment: f64,
    mut source: S,
    mut on_tick: impl FnMut(f64) -> ControlFlow<B>,
) -> B
where
    S: IncrementSource,
{
    loop {
        TimeoutFuture::new(interval_ms).await;
        if let ControlFlow::Break(result) = on_tick(source.next_increment(max_increment)) {
            return result;
        }
    }
}
