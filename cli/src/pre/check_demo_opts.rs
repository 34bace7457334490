use crate::pre::demo_opts::DemoOpts;
use crate::pre::read_demo_pars::DemoPars;
use anyhow::Context;
use circbuf::general::InputValueError;

/// check_demo_opts assures that the inserted options are within reasonable limits and raises an
/// error if not.
pub fn check_demo_opts(demo_opts: &DemoOpts) -> anyhow::Result<()> {
    if demo_opts.capacity < 1 {
        return Err(InputValueError).context(format!(
            "capacity must be at least equal to one, but is {}!",
            demo_opts.capacity
        ));
    }

    if demo_opts.parfile_path.is_none() && demo_opts.no_values < 1 {
        return Err(InputValueError).context(format!(
            "no_values must be at least equal to one, but is {}!",
            demo_opts.no_values
        ));
    }

    if demo_opts.max_value < 1 || demo_opts.max_value > i32::MAX as u32 {
        return Err(InputValueError).context(format!(
            "max_value is {}, which is not within the reasonable range of [1, {}]!",
            demo_opts.max_value,
            i32::MAX
        ));
    }

    Ok(())
}

/// check_demo_pars assures that a parameter file provides a usable capacity and at least one
/// value.
pub fn check_demo_pars<T>(demo_pars: &DemoPars<T>) -> anyhow::Result<()> {
    if demo_pars.capacity == Some(0) {
        return Err(InputValueError)
            .context("The capacity in the parameter file must be at least equal to one!");
    }

    if demo_pars.values.is_empty() {
        return Err(InputValueError)
            .context("The parameter file must contain at least one value!");
    }

    Ok(())
}
