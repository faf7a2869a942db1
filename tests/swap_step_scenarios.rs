use std::str::FromStr;

use clmm_swap_step::{
    compute_swap_step, sqrt_price_math, AmountSpec, FeeAmount, Rounding, SwapStepResult, I256,
    U256,
};
use rstest::rstest;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env()) // Use RUST_LOG for log levels
        .with_test_writer()
        .try_init();
}

fn u256(s: &str) -> U256 {
    U256::from_str(s).unwrap()
}

fn e18() -> U256 {
    u256("1000000000000000000")
}

/// sqrt(1) in Q64.96
fn price_one() -> U256 {
    u256("79228162514264337593543950336")
}

/// sqrt(1.01) in Q64.96
fn price_101_100() -> U256 {
    u256("79623317895830914510639640423")
}

/// sqrt(10) in Q64.96
fn price_1000_100() -> U256 {
    u256("250541448375047931186413801569")
}

/// sqrt(100) in Q64.96
fn price_10000_100() -> U256 {
    u256("792281625142643375935439503360")
}

fn step(res: &SwapStepResult) -> (U256, U256, U256, U256) {
    (res.sqrt_price_next, res.amount_in, res.amount_out, res.fee_amount)
}

#[rstest]
#[case::exact_in_capped_at_target(
    price_one(),
    price_101_100(),
    2_000_000_000_000_000_000u128,
    AmountSpec::ExactIn(e18()),
    600,
    (price_101_100(), u256("9975124224178055"), u256("9925619580021728"), u256("5988667735148"))
)]
#[case::exact_out_capped_at_target(
    price_one(),
    price_101_100(),
    2_000_000_000_000_000_000u128,
    AmountSpec::ExactOut(e18()),
    600,
    (price_101_100(), u256("9975124224178055"), u256("9925619580021728"), u256("5988667735148"))
)]
#[case::exact_in_fully_spent(
    price_one(),
    price_1000_100(),
    2_000_000_000_000_000_000u128,
    AmountSpec::ExactIn(e18()),
    600,
    (
        u256("118818475322642227089037862318"),
        u256("999400000000000000"),
        u256("666399946655997866"),
        u256("600000000000000")
    )
)]
#[case::exact_out_fully_received(
    price_one(),
    price_10000_100(),
    2_000_000_000_000_000_000u128,
    AmountSpec::ExactOut(e18()),
    600,
    (
        u256("158456325028528675187087900672"),
        u256("2000000000000000000"),
        e18(),
        u256("1200720432259356")
    )
)]
#[case::exact_out_capped_at_requested(
    u256("417332158212080721273783715441582"),
    u256("1452870262520218020823638996"),
    159344665391607089467575320103u128,
    AmountSpec::ExactOut(U256::from(1u64)),
    1,
    (
        u256("417332158212080721273783715441581"),
        U256::from(1u64),
        U256::from(1u64),
        U256::from(1u64)
    )
)]
#[case::target_price_of_one(
    U256::from(2u64),
    U256::from(1u64),
    1u128,
    AmountSpec::ExactIn(u256("3915081100057732413702495386755767")),
    1,
    (
        U256::from(1u64),
        u256("39614081257132168796771975168"),
        U256::ZERO,
        u256("39614120871253040049813")
    )
)]
#[case::entire_input_taken_as_fee(
    U256::from(2413u64),
    u256("79887613182836312"),
    1985041575832132834610021537970u128,
    AmountSpec::ExactIn(U256::from(10u64)),
    1872,
    (U256::from(2413u64), U256::ZERO, U256::ZERO, U256::from(10u64))
)]
#[case::insufficient_liquidity_zero_for_one_exact_out(
    u256("20282409603651670423947251286016"),
    u256("22310650564016837466341976414617"),
    1024u128,
    AmountSpec::ExactOut(U256::from(4u64)),
    3000,
    (u256("22310650564016837466341976414617"), U256::from(26215u64), U256::ZERO, U256::from(79u64))
)]
#[case::insufficient_liquidity_one_for_zero_exact_out(
    u256("20282409603651670423947251286016"),
    u256("18254168643286503381552526157414"),
    1024u128,
    AmountSpec::ExactOut(U256::from(263000u64)),
    3000,
    (u256("18254168643286503381552526157414"), U256::from(1u64), U256::from(26214u64), U256::from(1u64))
)]
fn test_swap_step_reference_vectors(
    #[case] price: U256,
    #[case] target: U256,
    #[case] liquidity: u128,
    #[case] amount: AmountSpec,
    #[case] fee_pips: u32,
    #[case] exp: (U256, U256, U256, U256),
) {
    init_tracing();

    let res = compute_swap_step(price, target, liquidity, amount, fee_pips).unwrap();

    assert_eq!(step(&res), exp);
    assert_eq!(res.zero_for_one, price >= target);
}

#[test]
fn test_exact_in_fully_spent_charges_whole_amount() {
    let liquidity = 2_000_000_000_000_000_000u128;

    let res =
        compute_swap_step(price_one(), price_1000_100(), liquidity, AmountSpec::ExactIn(e18()), 600)
            .unwrap();

    assert!(res.sqrt_price_next < price_1000_100());
    assert_eq!(res.amount_in_with_fee().unwrap(), e18());
    let price_after_whole_input_less_fee =
        sqrt_price_math::get_next_sqrt_price_from_input(price_one(), liquidity, res.amount_in, false)
            .unwrap();
    assert_eq!(res.sqrt_price_next, price_after_whole_input_less_fee);
}

#[test]
fn test_exact_out_beyond_target_pays_maximum_output() {
    let liquidity = 2_000_000_000_000_000_000u128;

    let res =
        compute_swap_step(price_one(), price_101_100(), liquidity, AmountSpec::ExactOut(e18()), 600)
            .unwrap();

    let max_out =
        sqrt_price_math::get_amount0_delta(price_one(), price_101_100(), liquidity, Rounding::Down)
            .unwrap();
    assert_eq!(res.sqrt_price_next, price_101_100());
    assert_eq!(res.amount_out, max_out);
    assert!(res.amount_out < e18());
}

#[rstest]
#[case::exact_in(AmountSpec::ExactIn(e18()))]
#[case::exact_out(AmountSpec::ExactOut(e18()))]
#[case::exact_in_zero(AmountSpec::ExactIn(U256::ZERO))]
fn test_price_at_target_moves_nothing(
    #[case] amount: AmountSpec,
    #[values(1u128, 1_000_000u128, u128::MAX)] liquidity: u128,
    #[values(FeeAmount::Lowest, FeeAmount::High)] fee: FeeAmount,
) {
    let res = compute_swap_step(price_one(), price_one(), liquidity, amount, fee.pips()).unwrap();

    assert_eq!(step(&res), (price_one(), U256::ZERO, U256::ZERO, U256::ZERO));
}

#[rstest]
#[case::zero_for_one(u256("39614081257132168796771975168"), U256::from(1000u64), u256("79228162514264258365381436072"), U256::from(999u64))]
#[case::one_for_zero(u256("158456325028528675187087900672"), U256::from(1000u64), u256("79228162514264416821706464600"), U256::from(999u64))]
#[case::larger_amount(u256("39614081257132168796771975168"), u256("1000000000000000"), u256("79149013500763574019524425911"), u256("999000999000999"))]
fn test_small_exact_in_without_fee_stays_inside_range(
    #[case] target: U256,
    #[case] amount: U256,
    #[case] exp_price: U256,
    #[case] exp_out: U256,
) {
    let res = compute_swap_step(
        price_one(),
        target,
        1_000_000_000_000_000_000u128,
        AmountSpec::ExactIn(amount),
        0,
    )
    .unwrap();

    assert_eq!(res.sqrt_price_next, exp_price);
    assert_ne!(res.sqrt_price_next, price_one());
    assert_ne!(res.sqrt_price_next, target);
    assert_eq!(res.amount_in, amount);
    assert_eq!(res.amount_out, exp_out);
    assert_eq!(res.fee_amount, U256::ZERO);
}

#[test]
fn test_signed_amount_convention() {
    let liquidity = 2_000_000_000_000_000_000u128;
    let exact_out = I256::from_str("-1000000000000000000").unwrap();

    let signed = compute_swap_step(
        price_one(),
        price_101_100(),
        liquidity,
        AmountSpec::from(exact_out),
        600,
    )
    .unwrap();
    let tagged =
        compute_swap_step(price_one(), price_101_100(), liquidity, AmountSpec::ExactOut(e18()), 600)
            .unwrap();

    assert_eq!(signed, tagged);
}

#[test]
fn test_step_result_serializes() {
    let res = compute_swap_step(
        price_one(),
        price_101_100(),
        2_000_000_000_000_000_000u128,
        AmountSpec::ExactIn(e18()),
        FeeAmount::Medium.pips(),
    )
    .unwrap();

    let json = serde_json::to_string(&res).unwrap();
    let decoded: SwapStepResult = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, res);
}
