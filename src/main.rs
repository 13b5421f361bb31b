//! Stable Travel TUI - actor-based stablecoin wallet demo
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - Session Layer - central state machine processing intents
//! - Engine Layer - logical clock, cancellable timers, simulated operations

mod constants;
mod engine;
mod error;
mod format;
mod ledger;
mod messages;
mod models;
mod session;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use constants::{APP_NAME, STAKING_APY, TOPUP_CONVERSION_RATE, TOPUP_MAX, TOPUP_MIN};
use messages::ui_events::{key_to_ui_event, AuthField, InputMode};
use messages::{RenderState, UiEvent};
use models::CurrencyMode;
use session::nav::Page;
use session::SessionActor;
use ui::{direction_color, direction_sign, nav_slot, render_nav_tabs, render_progress, toggle_marker};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file (the terminal belongs to the TUI)
    let file_appender = tracing_appender::rolling::never(".", "stable-travel.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn the session actor
    tokio::spawn(SessionActor::new(render_tx).run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, &current_state) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    if state.page == Page::Splash {
        draw_splash(f, area);
        return;
    }

    let mut constraints = vec![Constraint::Min(0)];
    if state.bottom_nav_visible {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let content = chunks[0];
    match state.page {
        Page::Splash => {}
        Page::Login | Page::Signup => draw_auth_page(f, state, content),
        Page::Home => draw_home(f, state, content),
        Page::Topup => draw_topup_body(f, state, content, false),
        Page::Staking => draw_staking(f, state, content),
        Page::Payment => draw_payment(f, state, content),
        Page::Profile => draw_profile_body(f, state, content, false),
        Page::Transactions => draw_transactions(f, state, content),
    }

    if state.bottom_nav_visible {
        draw_bottom_nav(f, state, chunks[1]);
    }
    draw_status_bar(f, state, chunks[chunks.len() - 1]);

    // Overlays above the base page
    if state.topup_sheet {
        let popup = centered_rect(70, 80, area);
        f.render_widget(Clear, popup);
        draw_topup_body(f, state, popup, true);
    }
    if state.profile_popup {
        let popup = centered_rect(70, 85, area);
        f.render_widget(Clear, popup);
        draw_profile_body(f, state, popup, true);
    }
    if state.face_modal {
        draw_face_modal(f, state, area);
    }

    // Snackbar on top of everything
    if let Some(notice) = &state.notice {
        draw_snackbar(f, notice, area);
    }
}

fn draw_splash(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 30, area);
    let logo = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "◈ Stable Travel Card",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "여행을 위한 스테이블코인 지갑",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(logo, popup);
}

fn draw_auth_page(f: &mut Frame, state: &RenderState, area: Rect) {
    let signup = state.page == Page::Signup;
    let title = if signup { " 새 계정 만들기 " } else { " 로그인 " };

    let mut constraints = vec![Constraint::Length(2)];
    if signup {
        constraints.push(Constraint::Length(3)); // name
    }
    constraints.extend([
        Constraint::Length(3), // email
        Constraint::Length(3), // password
        Constraint::Length(2), // quick login
        Constraint::Length(2), // social login
        Constraint::Min(0),
    ]);

    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = Paragraph::new(Span::styled(
        "◈ Stable Travel Card",
        Style::default().fg(Color::Magenta).bold(),
    ))
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let mut row = 1;
    if signup {
        draw_auth_field(f, state, chunks[row], AuthField::Name, "이름", &state.name_input);
        row += 1;
    }
    draw_auth_field(f, state, chunks[row], AuthField::Email, "이메일", &state.email_input);
    draw_auth_field(
        f,
        state,
        chunks[row + 1],
        AuthField::Password,
        "비밀번호",
        &"*".repeat(state.password_input.len()),
    );

    let quick = if state.fingerprint_pending {
        Line::from(Span::styled(
            "Touch ID 인식 중...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("간편 로그인: ", Style::default().fg(Color::DarkGray)),
            Span::raw("f: Face ID  t: Touch ID"),
        ])
    };
    f.render_widget(Paragraph::new(quick), chunks[row + 2]);

    let social = Line::from(vec![
        Span::styled("소셜 로그인: ", Style::default().fg(Color::DarkGray)),
        Span::styled("1: Kakao ", Style::default().fg(Color::Yellow)),
        Span::styled("2: Line ", Style::default().fg(Color::Green)),
        Span::raw("3: Google"),
    ]);
    f.render_widget(Paragraph::new(social), chunks[row + 3]);

    let switch = if signup {
        "l: 이메일로 로그인"
    } else {
        "s: 이메일로 회원가입"
    };
    f.render_widget(
        Paragraph::new(Span::styled(switch, Style::default().fg(Color::DarkGray))),
        chunks[row + 4],
    );
}

fn draw_auth_field(
    f: &mut Frame,
    state: &RenderState,
    area: Rect,
    field: AuthField,
    title: &str,
    content: &str,
) {
    let is_focused = state.auth_field == field;
    let border_style = if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title));
    f.render_widget(Paragraph::new(content.to_string()).block(block), area);

    if is_focused && state.input_mode == InputMode::Editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + content.len() as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // app bar
            Constraint::Length(5), // balance card
            Constraint::Length(6), // chart card
            Constraint::Length(4), // staking teaser
            Constraint::Min(4),    // recent transactions
        ])
        .split(area);

    draw_app_bar(f, state, chunks[0]);
    draw_balance_card(f, state, chunks[1]);
    draw_chart_card(f, state, chunks[2]);
    draw_staking_teaser(f, state, chunks[3]);
    draw_recent_transactions(f, state, chunks[4]);
}

fn draw_app_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let bar = Line::from(vec![
        Span::styled("◈ ", Style::default().fg(Color::Magenta)),
        Span::styled(APP_NAME, Style::default().fg(Color::Magenta).bold()),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", state.currency_mode.as_str()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(" m:전환  p:프로필", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}

fn draw_balance_card(f: &mut Frame, state: &RenderState, area: Rect) {
    let change = match state.currency_mode {
        CurrencyMode::Krw => "+₩12,500 (+2.1%)",
        CurrencyMode::Usdt => "+9.26 USDT (+2.1%)",
    };
    let card = Paragraph::new(vec![
        Line::from(Span::styled("총 보유자산", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format::currency(state.balance, state.currency_mode),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(vec![
            Span::styled("24시간 변동 ", Style::default().fg(Color::DarkGray)),
            Span::styled(change, Style::default().fg(Color::Green)),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(" 지갑 (c:충전하기) "));
    f.render_widget(card, area);
}

fn draw_chart_card(f: &mut Frame, state: &RenderState, area: Rect) {
    let values: Vec<i64> = state.price_series.iter().map(|p| p.value).collect();
    let max = values.iter().copied().max().unwrap_or(0);
    let min = values.iter().copied().min().unwrap_or(0);
    let (change, percent) = match values.len() {
        n if n >= 2 => {
            let change = values[n - 1] - values[n - 2];
            (change, change as f64 / values[n - 2] as f64 * 100.0)
        }
        _ => (0, 0.0),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Stable Travel Coin ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let current = values.last().copied().unwrap_or(0);
    let header = Line::from(vec![
        Span::styled(format::krw(current), Style::default().bold()),
        Span::styled(
            format!("  {}{} ({:+.2}%)", if change >= 0 { "+" } else { "" }, change, percent),
            Style::default().fg(if change >= 0 { Color::Green } else { Color::Red }),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    // normalize so the small daily moves stay visible
    let bars: Vec<u64> = values.iter().map(|v| (v - min + 1) as u64).collect();
    let sparkline = Sparkline::default()
        .data(&bars)
        .style(Style::default().fg(Color::Magenta));
    f.render_widget(sparkline, chunks[1]);

    let stats = Line::from(Span::styled(
        format!("최고가 {}  최저가 {}", format::krw(max), format::krw(min)),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(stats), chunks[2]);
}

fn draw_staking_teaser(f: &mut Frame, state: &RenderState, area: Rect) {
    let card = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format::currency(state.staking_ceiling, state.currency_mode),
                Style::default().bold(),
            ),
            Span::styled(
                " 스테이킹 가능 (보유 자산의 30%)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled("2: 스테이킹하기", Style::default().fg(Color::DarkGray))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" 스테이킹 (APY: {:.1}%) ", STAKING_APY * 100.0)),
    );
    f.render_widget(card, area);
}

fn draw_recent_transactions(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = state
        .transactions
        .iter()
        .take(2)
        .map(|tx| transaction_item(tx, state.currency_mode))
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new("최근 거래 내역이 없습니다")])
    } else {
        List::new(items)
    };
    f.render_widget(
        list.block(Block::default().borders(Borders::ALL).title(" 최근 거래 (4:더보기) ")),
        area,
    );
}

fn transaction_item(tx: &models::Transaction, mode: CurrencyMode) -> ListItem<'static> {
    let amount = format::ledger_amount(&tx.amount, mode);
    ListItem::new(Line::from(vec![
        Span::raw(format!("{:12} ", tx.date)),
        Span::raw(format!("{:12} ", tx.description)),
        Span::styled(
            format!("{}{}", direction_sign(tx.direction), amount),
            Style::default().fg(direction_color(tx.direction)),
        ),
    ]))
}

fn draw_topup_body(f: &mut Frame, state: &RenderState, area: Rect, overlay: bool) {
    let title = if overlay { " 충전하기 (Esc:닫기) " } else { " 충전하기 " };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // conversion rate
            Constraint::Length(3), // amount slider
            Constraint::Length(2), // usdc preview
            Constraint::Length(3), // progress / action
            Constraint::Min(0),
        ])
        .split(inner);

    let rate = Paragraph::new(vec![
        Line::from(Span::styled("KRW ↔ USDC 변환 비율", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!("1 USDC = ₩{:.2}", TOPUP_CONVERSION_RATE),
            Style::default().fg(Color::Blue).bold(),
        )),
    ]);
    f.render_widget(rate, chunks[0]);

    let span = (TOPUP_MAX - TOPUP_MIN) as f64;
    let ratio = (state.topup_amount - TOPUP_MIN) as f64 / span;
    let slider = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" 충전 금액: {} (↑/↓) ", format::krw(state.topup_amount))),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format::krw(state.topup_amount));
    f.render_widget(slider, chunks[1]);

    let usdc = state.topup_amount as f64 / TOPUP_CONVERSION_RATE;
    let preview = Paragraph::new(vec![
        Line::from(Span::styled("충전 후 USDC", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format!("{:.2} USDC", usdc),
            Style::default().fg(Color::Blue).bold(),
        )),
    ]);
    f.render_widget(preview, chunks[2]);

    match state.topup_progress {
        Some(progress) => {
            f.render_widget(render_progress(" 충전 처리 중... (KRW → USDC 변환 중) ", progress), chunks[3]);
        }
        None => {
            let action = Paragraph::new(Span::styled(
                "s: 충전하기",
                Style::default().fg(Color::Green).bold(),
            ))
            .block(Block::default().borders(Borders::ALL));
            f.render_widget(action, chunks[3]);
        }
    }
}

fn draw_staking(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" 스테이킹 (현재 APY {:.1}%) ", STAKING_APY * 100.0));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // amount slider
            Constraint::Length(2), // range line
            Constraint::Length(3), // progress / action
            Constraint::Min(3),    // history
        ])
        .split(inner);

    let ratio = if state.staking_ceiling > 0 {
        state.staking_amount as f64 / state.staking_ceiling as f64
    } else {
        0.0
    };
    let slider = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " 스테이킹 금액: {} (↑/↓) ",
                    format::currency(state.staking_amount, state.currency_mode)
                )),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format::krw(state.staking_amount));
    f.render_widget(slider, chunks[0]);

    let range = Paragraph::new(Span::styled(
        format!(
            "₩0 ~ {} (보유 자산의 30%)",
            format::currency(state.staking_ceiling, state.currency_mode)
        ),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(range, chunks[1]);

    match state.staking_progress {
        Some(progress) => {
            f.render_widget(render_progress(" 스테이킹 처리 중... ", progress), chunks[2]);
        }
        None => {
            let (label, style) = if state.staking_amount == 0 {
                ("스테이킹 시작 (금액을 선택하세요)", Style::default().fg(Color::DarkGray))
            } else {
                ("s: 스테이킹 시작", Style::default().fg(Color::Green).bold())
            };
            f.render_widget(
                Paragraph::new(Span::styled(label, style)).block(Block::default().borders(Borders::ALL)),
                chunks[2],
            );
        }
    }

    draw_staking_history(f, state, chunks[3]);
}

fn draw_staking_history(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = state
        .staking_history
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:12} ", record.date)),
                Span::raw(format!("{:>12} ", format::ledger_amount(&record.amount, state.currency_mode))),
                Span::styled(
                    format!("+{} 수익", format::ledger_amount(&record.earned, state.currency_mode)),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" 스테이킹 내역 ")),
        area,
    );
}

fn draw_payment(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 해외 결제 시뮬레이션 ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // amount card
            Constraint::Length(1), // rate line
            Constraint::Length(3), // progress / action
            Constraint::Min(0),
        ])
        .split(inner);

    let eur = constants::PAYMENT_AMOUNT_EUR;
    let rate = constants::PAYMENT_RATE_KRW_PER_EUR;
    let converted = (eur * rate).round() as i64;
    let amount_card = Paragraph::new(vec![
        Line::from(Span::styled("결제 금액", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            format::eur(eur),
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(Span::styled(
            format!("({})", format::currency(converted, state.currency_mode)),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(amount_card, chunks[0]);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("환율: {}", format::eur_rate(rate, state.currency_mode)),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[1],
    );

    match state.payment_progress {
        Some(progress) => {
            f.render_widget(render_progress(" 현지 통화로 변환 중... ", progress), chunks[2]);
        }
        None => {
            f.render_widget(
                Paragraph::new(Span::styled("s: 결제하기", Style::default().fg(Color::Green).bold()))
                    .block(Block::default().borders(Borders::ALL)),
                chunks[2],
            );
        }
    }
}

fn draw_transactions(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let items: Vec<ListItem> = state
        .transactions
        .iter()
        .map(|tx| transaction_item(tx, state.currency_mode))
        .collect();
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title(" 결제 내역 ")),
        chunks[0],
    );

    draw_staking_history(f, state, chunks[1]);
}

fn draw_profile_body(f: &mut Frame, state: &RenderState, area: Rect, popup: bool) {
    let title = if popup { " 프로필 (Esc:닫기) " } else { " 프로필 " };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // identity
            Constraint::Length(4), // staking info
            Constraint::Length(4), // account info
            Constraint::Min(6),    // settings
        ])
        .split(inner);

    let profile = &state.profile;
    let identity = Paragraph::new(vec![
        Line::from(Span::styled(profile.name.clone(), Style::default().bold())),
        Line::from(vec![
            Span::styled(profile.email.clone(), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("  {} 등급", profile.level),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ]);
    f.render_widget(identity, chunks[0]);

    let manage_hint = if popup { " (s:스테이킹 관리)" } else { "" };
    let staking_info = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("총 스테이킹 ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format::currency(profile.total_staking, state.currency_mode),
                Style::default().bold(),
            ),
        ]),
        Line::from(vec![
            Span::styled("총 수익     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format::currency(profile.total_earned, state.currency_mode),
                Style::default().fg(Color::Green).bold(),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::TOP)
            .title(format!(" 스테이킹 정보{} ", manage_hint)),
    );
    f.render_widget(staking_info, chunks[1]);

    let account = Paragraph::new(vec![
        Line::from(Span::raw(format!("전화번호  {}", profile.phone))),
        Line::from(Span::raw(format!("가입일    {}", profile.join_date))),
    ])
    .block(Block::default().borders(Borders::TOP).title(" 계정 정보 "));
    f.render_widget(account, chunks[2]);

    let settings = state.settings;
    let face_state = if settings.face_auth { "활성화됨" } else { "비활성화됨" };
    let mut lines = vec![
        Line::from(vec![
            toggle_marker(settings.payment_notifications),
            Span::raw(" n: 결제 알림"),
        ]),
        Line::from(vec![
            toggle_marker(settings.exchange_rate_notifications),
            Span::raw(" x: 환율 알림"),
        ]),
        Line::from(vec![
            toggle_marker(settings.fingerprint_auth),
            Span::raw(" g: 지문 인증"),
        ]),
        Line::from(vec![
            toggle_marker(settings.face_auth),
            Span::raw(format!(" a: 얼굴 인증 ({})", face_state)),
        ]),
    ];
    if !popup {
        lines.push(Line::from(Span::styled(
            "o: 로그아웃",
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP).title(" 앱 설정 ")),
        chunks[3],
    );
}

fn draw_face_modal(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup = centered_rect(50, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Face ID (Esc:취소) ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    match state.face_progress {
        Some(progress) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
                .split(inner);
            f.render_widget(
                Paragraph::new(format!("Recognizing face... {}%", progress))
                    .alignment(Alignment::Center),
                chunks[0],
            );
            f.render_widget(render_progress(" 스캔 ", progress), chunks[1]);
        }
        None => {
            let prompt = Paragraph::new(vec![
                Line::from("Position your face in the frame"),
                Line::from(""),
                Line::from(Span::styled(
                    "s: Start Face ID",
                    Style::default().fg(Color::Green).bold(),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(prompt, inner);
        }
    }
}

fn draw_bottom_nav(f: &mut Frame, state: &RenderState, area: Rect) {
    let titles = [" 1:홈 ", " 2:스테이킹 ", " 3:결제 ", " 4:내역 "];
    f.render_widget(render_nav_tabs(&titles, nav_slot(state.page)), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.face_modal {
        " s:스캔 시작 | Esc:취소 "
    } else if state.topup_sheet {
        " ↑/↓:금액 | s:충전 | Esc:닫기 "
    } else if state.profile_popup {
        " n/x/g:설정 | a:얼굴 인증 | s:스테이킹 관리 | Esc:닫기 "
    } else if state.input_mode == InputMode::Editing {
        " ESC:입력 종료 | Tab:다음 필드 | Enter:제출 "
    } else {
        match state.page {
            Page::Login | Page::Signup => " e:입력 | Tab:필드 | Enter:로그인 | f/t:간편 | q:종료 ",
            Page::Home => " 1-4:이동 | c:충전 | p:프로필 | m:통화 | q:종료 ",
            Page::Staking => " ↑/↓:금액 | s:시작 | 1-4:이동 | q:종료 ",
            Page::Payment => " s:결제 | 1-4:이동 | q:종료 ",
            _ => " 1-4:이동 | p:프로필 | m:통화 | q:종료 ",
        }
    };
    f.render_widget(
        Paragraph::new(format!(" {} |{}", state.page.title(), status))
            .style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn draw_snackbar(f: &mut Frame, notice: &str, area: Rect) {
    let width = (notice.chars().count() as u16 + 4).min(area.width);
    let snackbar = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(4),
        width,
        height: 3,
    };
    f.render_widget(Clear, snackbar);
    f.render_widget(
        Paragraph::new(notice.to_string())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White).bg(Color::Black)),
        snackbar,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
