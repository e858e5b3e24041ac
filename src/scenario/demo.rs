// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The compiled-in walk-through: three escalating purchases settled to a
//! single merchant.
//!
//! | Steps  | Scenario                                                      |
//! |--------|---------------------------------------------------------------|
//! | 1..=3  | 20M purchase covered by the buyer's own balance               |
//! | 4..=8  | 40M purchase split over the buyer and two trust lines         |
//! | 9..=15 | capacity raise, then an 80M purchase with a two-hop chain     |

use crate::error::Result;
use crate::scenario::{FlowHint, Script, Step};
use crate::state::effect::Effect;
use crate::state::network::NetworkState;
use crate::types::amount::Amount;
use crate::types::enums::BalanceField;

pub const SAEED: &str = "سعید";
pub const HOSSEIN: &str = "حسین";
pub const ABBAS: &str = "عباس";
pub const HADI: &str = "هادی";
pub const DAVOOD: &str = "داوود";
pub const STORE: &str = "فروشگاه";

const M: Amount = 1_000_000;

/// Purchase amounts settled to the store, in script order.
pub const PURCHASES: [Amount; 3] = [20 * M, 40 * M, 80 * M];

/// Index of the step that raises عباس -> سعید to 70M.
pub const CAPACITY_RAISE_STEP: usize = 9;

/// Index of the last step of the second scenario.
pub const SPLIT_PURCHASE_END: usize = 8;

pub fn network() -> Result<NetworkState> {
    NetworkState::builder()
        .participant(SAEED, 30 * M)
        .participant(HOSSEIN, 100 * M)
        .participant(ABBAS, 50 * M)
        .participant(HADI, 70 * M)
        .participant(DAVOOD, 50 * M)
        .merchant(STORE)
        .trust_line(HOSSEIN, SAEED, 50 * M)
        .trust_line(ABBAS, SAEED, 50 * M)
        .trust_line(HADI, HOSSEIN, 50 * M)
        .trust_line(DAVOOD, HOSSEIN, 50 * M)
        .trust_line(DAVOOD, ABBAS, 50 * M)
        .trust_line(SAEED, STORE, 0)
        .build()
}

pub fn script() -> Result<Script> {
    Script::new(vec![
        Step::new("شبکه اولیه", "نمایش اعتبار اولیه افراد و خطوط اعتماد بین آنها"),
        // Direct purchase.
        Step::new(
            "خرید مستقیم - مرحله ۱",
            "سعید قصد خرید ۲۰ میلیون تومانی دارد. سیستم اعتبار شخصی او را بررسی می‌کند.",
        )
        .with_flow(FlowHint::new([SAEED], 1.0)),
        Step::new("خرید مستقیم - مرحله ۲", "سیستم ۲۰ میلیون تومان از اعتبار سعید کم می‌کند")
            .with_flow(FlowHint::new([SAEED], 1.0))
            .with_effect(Effect::new().add(SAEED, -20 * M)),
        Step::new("خرید مستقیم - مرحله ۳", "اعتبار به حساب فروشگاه منتقل می‌شود")
            .with_flow(FlowHint::new([SAEED, STORE], 1.0))
            .with_effect(Effect::new().set(STORE, BalanceField::Received, PURCHASES[0])),
        // Split purchase.
        Step::new(
            "خرید ترکیبی - مرحله ۱",
            "سعید قصد خرید ۴۰ میلیون تومانی دارد. سیستم مسیرهای اعتباری را بررسی می‌کند.",
        )
        .with_flow(FlowHint::new([HOSSEIN, SAEED, ABBAS], 0.3)),
        Step::new(
            "خرید ترکیبی - مرحله ۲",
            "سیستم ۱۰ میلیون تومان از اعتبار باقیمانده سعید استفاده می‌کند",
        )
        .with_flow(FlowHint::new([SAEED], 1.0))
        .with_effect(Effect::new().add(SAEED, -10 * M)),
        Step::new("خرید ترکیبی - مرحله ۳", "۲۰ میلیون تومان از خط اعتباری حسین استفاده می‌شود")
            .with_flow(FlowHint::new([HOSSEIN, SAEED], 1.0))
            .with_effect(Effect::new().add(HOSSEIN, -20 * M).draw(HOSSEIN, SAEED, 20 * M)),
        Step::new("خرید ترکیبی - مرحله ۴", "۱۰ میلیون تومان از خط اعتباری عباس استفاده می‌شود")
            .with_flow(FlowHint::new([ABBAS, SAEED], 1.0))
            .with_effect(Effect::new().add(ABBAS, -10 * M).draw(ABBAS, SAEED, 10 * M)),
        Step::new("خرید ترکیبی - مرحله ۵", "مجموع ۴۰ میلیون تومان به حساب فروشگاه منتقل می‌شود")
            .with_flow(FlowHint::new([SAEED, STORE], 1.0))
            .with_effect(Effect::new().set(STORE, BalanceField::Received, PURCHASES[1])),
        // Chained purchase.
        Step::new(
            "خرید پیچیده - تنظیم خط اعتباری",
            "عباس خط اعتباری خود به سعید را به ۷۰ میلیون تومان افزایش می‌دهد. از این مقدار ۱۰ میلیون قبلاً استفاده شده و ۶۰ میلیون باقی مانده است.",
        )
        .with_flow(FlowHint::new([ABBAS, SAEED], 1.0))
        .with_effect(Effect::new().set_capacity(ABBAS, SAEED, 70 * M)),
        Step::new(
            "خرید پیچیده - درخواست خرید",
            "سعید قصد خرید ۸۰ میلیون تومانی دارد. سیستم مسیرهای اعتباری را بررسی می‌کند.",
        )
        .with_flow(FlowHint::new([HOSSEIN, SAEED, ABBAS, DAVOOD], 0.3)),
        Step::new(
            "خرید پیچیده - مرحله ۱",
            "سیستم ۳۰ میلیون تومان از باقیمانده خط اعتباری حسین استفاده می‌کند",
        )
        .with_flow(FlowHint::new([HOSSEIN, SAEED], 1.0))
        .with_effect(Effect::new().add(HOSSEIN, -30 * M).draw(HOSSEIN, SAEED, 30 * M)),
        Step::new(
            "خرید پیچیده - مرحله ۲",
            "عباس قصد دارد ۵۰ میلیون به سعید اعتبار دهد، اما تنها ۴۰ میلیون اعتبار دارد",
        )
        .with_flow(FlowHint::new([ABBAS, DAVOOD], 1.0)),
        Step::new("خرید پیچیده - مرحله ۳", "عباس ۱۰ میلیون تومان از خط اعتباری داوود استفاده می‌کند")
            .with_flow(FlowHint::new([DAVOOD, ABBAS], 1.0))
            .with_effect(Effect::new().add(DAVOOD, -10 * M).draw(DAVOOD, ABBAS, 10 * M)),
        Step::new("خرید پیچیده - مرحله ۴", "حال عباس می‌تواند ۵۰ میلیون تومان به سعید اعتبار دهد")
            .with_flow(FlowHint::new([ABBAS, SAEED], 1.0))
            .with_effect(Effect::new().add(ABBAS, -40 * M).draw(ABBAS, SAEED, 50 * M)),
        Step::new("خرید پیچیده - مرحله نهایی", "مجموع ۸۰ میلیون تومان به حساب فروشگاه منتقل می‌شود")
            .with_flow(FlowHint::new([SAEED, STORE], 1.0))
            .with_effect(Effect::new().set(STORE, BalanceField::Received, PURCHASES[2])),
    ])
}
