//! Frame image layouts
//!
//! Every campaign frame is three bordered rows on black: a stats topper
//! (2/5), a message body, and the "Speed ... Ball" footer (1/5).

use crate::branding::copy;
use crate::presale::{ActivePresale, Presale};
use frame_ui::components::{box_, column, columns, heading, row, rows, text};
use frame_ui::Element;

const BORDER: &str = "4";

// =============================================================================
// Rows
// =============================================================================

fn top_row() -> Element {
    row()
        .height("2/5")
        .background_color("black")
        .color("blue")
        .text_transform("uppercase")
        .border_top_color("white")
        .border_top_width(BORDER)
        .border_right_color("white")
        .border_right_width(BORDER)
        .border_left_color("white")
        .border_left_width(BORDER)
}

fn middle_row(height: &str) -> Element {
    row()
        .height(height)
        .background_color("black")
        .border_right_color("white")
        .border_right_width(BORDER)
        .border_left_color("white")
        .border_left_width(BORDER)
}

fn bottom_row() -> Element {
    row()
        .height("1/5")
        .background_color("black")
        .color("teal")
        .text_transform("uppercase")
        .border_right_color("white")
        .border_right_width(BORDER)
        .border_bottom_color("white")
        .border_bottom_width(BORDER)
        .border_left_color("white")
        .border_left_width(BORDER)
        .child(footer())
}

// =============================================================================
// Pieces
// =============================================================================

fn stat(label: &str, value: &str) -> Element {
    column()
        .width("1/4")
        .align_horizontal("center")
        .align_vertical("center")
        .child(heading().size("48").text(label))
        .child(text().size("32").color("white").weight("400").text(value))
}

/// Goal / Price / Tokens / Ends columns
pub fn topper(goal: &str, price: &str, tokens: &str, ends: &str) -> Element {
    columns()
        .grow()
        .child(stat("Goal", goal))
        .child(stat("Price", price))
        .child(stat("Tokens", tokens))
        .child(stat("Ends", ends))
}

/// Topper with placeholder values
pub fn placeholder_topper() -> Element {
    let p = copy::PLACEHOLDER;
    topper(p, p, p, p)
}

/// "Speed Speed Speed Speed Speed Ball"
pub fn footer() -> Element {
    let speed = || {
        column()
            .width("1/6")
            .align_horizontal("right")
            .align_vertical("center")
            .child(heading().text("Speed"))
    };
    columns()
        .grow()
        .children((0..5).map(|_| speed()))
        .child(
            column()
                .width("1/6")
                .align_horizontal("left")
                .align_vertical("center")
                .child(heading().text("Ball")),
        )
}

// =============================================================================
// Views
// =============================================================================

/// Status frame with a large centered message
pub fn status_view(message: &str) -> Element {
    rows()
        .grow()
        .child(top_row().child(placeholder_topper()))
        .child(
            middle_row("2/5").child(
                columns().grow().child(
                    column()
                        .width("1/1")
                        .background_color("black")
                        .color("white")
                        .text_align("center")
                        .text_transform("uppercase")
                        .align_horizontal("center")
                        .padding_right("12")
                        .padding_left("12")
                        .child(heading().size("64").wrap("balance").text(message)),
                ),
            ),
        )
        .child(bottom_row())
}

/// Live presale frame
pub fn presale_view(presale: &ActivePresale) -> Element {
    let goal = format!("{} ETH", presale.goal);
    let price = format!("{} ETH", presale.min_tribute);

    rows()
        .grow()
        .child(top_row().child(topper(&goal, &price, &presale.tokens, &presale.ends)))
        .child(
            middle_row("3/5").color("white").child(
                box_()
                    .padding_top("28")
                    .text_transform("uppercase")
                    .child(
                        heading()
                            .size("48")
                            .color("orange")
                            .align("center")
                            .wrap("balance")
                            .text(format!("{} pre-sale", presale.name)),
                    )
                    .child(
                        text()
                            .size("32")
                            .color("white")
                            .align("center")
                            .wrap("balance")
                            .text(format!(
                                "Contribute {} ETH and receive {} ${}",
                                presale.min_tribute, presale.tokens, presale.share_token_symbol
                            )),
                    ),
            ),
        )
        .child(bottom_row())
}

/// Frame shown after a contribution
pub fn success_view() -> Element {
    rows()
        .grow()
        .child(
            top_row().child(
                columns().grow().child(
                    column()
                        .align_horizontal("center")
                        .align_vertical("center")
                        .child(heading().size("96").text("Banged")),
                ),
            ),
        )
        .child(
            middle_row("2/5").color("white").child(
                columns().grow().child(
                    column()
                        .text_align("center")
                        .text_transform("uppercase")
                        .align_horizontal("center")
                        .align_vertical("center")
                        .padding_right("12")
                        .padding_left("12")
                        .child(
                            heading()
                                .size("48")
                                .color("orange")
                                .wrap("balance")
                                .text("We ball from frames"),
                        ),
                ),
            ),
        )
        .child(bottom_row())
}

/// View for any presale state
pub fn presale_element(presale: &Presale) -> Element {
    match presale {
        Presale::NotFound => status_view(copy::NOT_FOUND),
        Presale::NotActive => status_view(copy::NOT_ACTIVE),
        Presale::ProfileMissing { .. } => status_view(copy::PROFILE_MISSING),
        Presale::Active(active) => presale_view(active),
    }
}
