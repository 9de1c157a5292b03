//! Countdown timers A and B.
//!
//! Both timers count down from an 8-bit value at the selected source clock
//! and raise their flag in Control_2 when they reach zero. Timer A can also
//! run as a watchdog. Acknowledge an elapsed timer with
//! [`PCF8523::clear_flag`].

use crate::{
    Control2, Error, PCF8523, RegAddr, RegisterTransport, StatusFlag, TimerAMode,
    TimerBPulseWidth, TimerFrequency,
};

impl<T: RegisterTransport> PCF8523<T> {
    /// Returns the timer A function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_a_mode(&mut self) -> Result<TimerAMode, Error<T::Error>> {
        Ok(self.timer_clkout_control()?.timer_a_mode())
    }

    /// Selects the timer A function, preserving the clock-out selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_a_mode(&mut self, mode: TimerAMode) -> Result<(), Error<T::Error>> {
        self.update_timer_clkout_control(|c| c.set_timer_a_mode(mode))?;
        Ok(())
    }

    /// Returns the timer A source clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_a_frequency(&mut self) -> Result<TimerFrequency, Error<T::Error>> {
        Ok(self.timer_a_freq_control()?.frequency())
    }

    /// Selects the timer A source clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_a_frequency(
        &mut self,
        frequency: TimerFrequency,
    ) -> Result<(), Error<T::Error>> {
        self.update_timer_a_freq_control(|c| c.set_frequency(frequency))?;
        Ok(())
    }

    /// Returns the current timer A count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_a_value(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(RegAddr::TimerA)
    }

    /// Loads the timer A count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_a_value(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.write_register(RegAddr::TimerA, value)
    }

    /// Enables or disables the timer A countdown interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_a_interrupt(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control2, Control2::COUNTDOWN_A_INTERRUPT, enable)
    }

    /// Enables or disables the timer A watchdog interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_watchdog_a_interrupt(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control2, Control2::WATCHDOG_A_INTERRUPT, enable)
    }

    /// Selects a pulsed (true) or permanent (false) timer A interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_a_pulsed(&mut self, pulsed: bool) -> Result<(), Error<T::Error>> {
        self.update_timer_clkout_control(|c| c.set_timer_a_pulsed(pulsed))?;
        Ok(())
    }

    /// Returns true once timer A has counted down to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_a_elapsed(&mut self) -> Result<bool, Error<T::Error>> {
        self.flag(StatusFlag::CountdownA)
    }

    /// Starts a timer A countdown of `value` periods of `frequency`.
    ///
    /// The source clock and count are loaded before the timer is switched to
    /// countdown mode so it starts from the new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn start_timer_a(
        &mut self,
        value: u8,
        frequency: TimerFrequency,
    ) -> Result<(), Error<T::Error>> {
        debug!("timer A: {} x {:?}", value, frequency);
        self.set_timer_a_mode(TimerAMode::Disabled)?;
        self.set_timer_a_frequency(frequency)?;
        self.set_timer_a_value(value)?;
        self.set_timer_a_mode(TimerAMode::Countdown)
    }

    /// Returns true if timer B is running.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_b_enabled(&mut self) -> Result<bool, Error<T::Error>> {
        Ok(self.timer_clkout_control()?.timer_b_enabled())
    }

    /// Starts or stops timer B, preserving the clock-out selection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_b_enabled(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_timer_clkout_control(|c| c.set_timer_b_enabled(enable))?;
        Ok(())
    }

    /// Returns the timer B source clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_b_frequency(&mut self) -> Result<TimerFrequency, Error<T::Error>> {
        Ok(self.timer_b_freq_control()?.frequency())
    }

    /// Selects the timer B source clock, preserving the pulse width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_b_frequency(
        &mut self,
        frequency: TimerFrequency,
    ) -> Result<(), Error<T::Error>> {
        self.update_timer_b_freq_control(|c| c.set_frequency(frequency))?;
        Ok(())
    }

    /// Returns the timer B interrupt pulse width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_b_pulse_width(&mut self) -> Result<TimerBPulseWidth, Error<T::Error>> {
        Ok(self.timer_b_freq_control()?.pulse_width())
    }

    /// Selects the timer B interrupt pulse width, preserving the source clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_b_pulse_width(
        &mut self,
        width: TimerBPulseWidth,
    ) -> Result<(), Error<T::Error>> {
        self.update_timer_b_freq_control(|c| c.set_pulse_width(width))?;
        Ok(())
    }

    /// Returns the current timer B count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_b_value(&mut self) -> Result<u8, Error<T::Error>> {
        self.read_register(RegAddr::TimerB)
    }

    /// Loads the timer B count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_b_value(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.write_register(RegAddr::TimerB, value)
    }

    /// Enables or disables the timer B interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_b_interrupt(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.update_bit(RegAddr::Control2, Control2::COUNTDOWN_B_INTERRUPT, enable)
    }

    /// Selects a pulsed (true) or permanent (false) timer B interrupt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn set_timer_b_pulsed(&mut self, pulsed: bool) -> Result<(), Error<T::Error>> {
        self.update_timer_clkout_control(|c| c.set_timer_b_pulsed(pulsed))?;
        Ok(())
    }

    /// Returns true once timer B has counted down to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn timer_b_elapsed(&mut self) -> Result<bool, Error<T::Error>> {
        self.flag(StatusFlag::CountdownB)
    }

    /// Starts a timer B countdown of `value` periods of `frequency`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] on bus failure.
    pub fn start_timer_b(
        &mut self,
        value: u8,
        frequency: TimerFrequency,
    ) -> Result<(), Error<T::Error>> {
        debug!("timer B: {} x {:?}", value, frequency);
        self.set_timer_b_enabled(false)?;
        self.set_timer_b_frequency(frequency)?;
        self.set_timer_b_value(value)?;
        self.set_timer_b_enabled(true)
    }
}
