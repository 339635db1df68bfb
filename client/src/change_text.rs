use leptos::prelude::*;

/// Sign convention for honor deltas: gains green, losses red, zero muted.
pub(crate) const fn change_color(amount: i64) -> &'static str {
    if amount > 0 {
        "#50c878"
    } else if amount < 0 {
        "#eb5757"
    } else {
        "#9a9590"
    }
}

/// Gains carry an explicit plus; losses keep the number's own sign.
pub(crate) fn format_change(amount: i64) -> String {
    if amount > 0 {
        format!("+{amount}")
    } else {
        amount.to_string()
    }
}

/// Signed honor delta with the color/sign convention applied.
#[component]
pub(crate) fn ChangeAmount(amount: i64) -> impl IntoView {
    view! {
        <span style=format!(
            "font-family: 'JetBrains Mono', monospace; font-variant-numeric: tabular-nums; color: {};",
            change_color(amount)
        )>{format_change(amount)}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::{change_color, format_change};

    #[test]
    fn gains_are_green_with_plus_sign() {
        assert_eq!(format_change(5), "+5");
        assert_eq!(change_color(5), "#50c878");
    }

    #[test]
    fn losses_are_red_with_native_sign() {
        assert_eq!(format_change(-3), "-3");
        assert_eq!(change_color(-3), "#eb5757");
    }

    #[test]
    fn zero_is_muted_and_unsigned() {
        assert_eq!(format_change(0), "0");
        assert_eq!(change_color(0), "#9a9590");
    }
}
