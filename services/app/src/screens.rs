//! Terminal screens
//!
//! The presentation layer: prompts and printouts over the SDK. Business
//! failures are echoed in place the way the mobile app toasts them; a session
//! expiry interrupts whatever screen is active and falls back to login.

use std::io::{self, Write};

use anyhow::Result;
use client::ApiError;
use client::api::RevealOutcome;

use crate::{AppState, SessionEnded};

fn prompt(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print a failure the way the app toasts it; true when the session ended
/// and the caller must fall back to the login screen
fn report(err: &ApiError) -> bool {
    if err.is_session_expired() {
        // The redirect handler has already told the user
        return true;
    }

    match err {
        ApiError::Validation(message) => {
            println!("{message}");
            false
        }
        ApiError::Transport(_) => {
            println!("Network error! Check your internet connection.");
            false
        }
        _ => {
            println!("Something went wrong.");
            false
        }
    }
}

/// Phone/OTP login flow; returns false when the user quits the app
pub async fn login(state: &AppState) -> Result<bool> {
    loop {
        let phone = prompt("\nMobile number (q to quit)")?;
        if phone == "q" {
            return Ok(false);
        }

        match state.auth.request_otp(&phone).await {
            Ok(response) if response.success => {
                println!("OTP sent to {phone}.");
            }
            Ok(response) => {
                println!(
                    "{}",
                    response.message.as_deref().unwrap_or("Something went wrong!")
                );
                continue;
            }
            Err(err) => {
                report(&err);
                continue;
            }
        }

        loop {
            let otp = prompt("OTP (r to resend, b to change number)")?;
            if otp == "b" {
                break;
            }
            if otp == "r" {
                match state.auth.request_otp(&phone).await {
                    Ok(_) => println!("OTP re-sent."),
                    Err(err) => {
                        report(&err);
                    }
                }
                continue;
            }

            match state.auth.validate_otp(&phone, &otp).await {
                Ok(response) if response.success => {
                    println!("OTP verified! Welcome back.");
                    return Ok(true);
                }
                Ok(response) => {
                    println!("{}", response.message.as_deref().unwrap_or("Invalid OTP!"));
                }
                Err(err) => {
                    report(&err);
                }
            }
        }
    }
}

/// Main menu; returns false to quit the app, true to fall back to login
pub async fn menu(state: &AppState, session_ended: &SessionEnded) -> Result<bool> {
    loop {
        println!("\n1) Dashboard  2) Rewards  3) Payment status  4) Screenshots  5) Profile  6) Logout  q) Quit");
        let choice = prompt("Choose")?;

        let expired = match choice.as_str() {
            "1" => dashboard(state).await?,
            "2" => rewards(state).await?,
            "3" => timeline(state).await?,
            "4" => screenshots(state).await?,
            "5" => profile(state).await?,
            "6" => {
                state.auth.logout().await?;
                println!("Logged out.");
                return Ok(true);
            }
            "q" => return Ok(false),
            _ => {
                println!("Unknown option.");
                false
            }
        };

        if expired || session_ended.take() {
            return Ok(true);
        }
    }
}

/// Outstanding balance and the three repayment offers
async fn dashboard(state: &AppState) -> Result<bool> {
    let response = match state.clients.get_client().await {
        Ok(response) => response,
        Err(err) => return Ok(report(&err)),
    };

    let Some(client) = response.client.filter(|_| response.success) else {
        println!(
            "{}",
            response.message.as_deref().unwrap_or("Failed to load your loan details.")
        );
        return Ok(false);
    };

    if client.is_paid {
        println!("\nPayment received — thank you!");
    }

    for option in client.payment_options() {
        println!(
            "\n{}\n  Amount ₹ {}   Reward ₹ {}",
            option.title, option.amount, option.reward
        );
        if let Some(url) = &option.payment_url {
            println!("  Pay at: {url}");
        }
    }

    Ok(false)
}

/// Scratch cards: list and reveal
async fn rewards(state: &AppState) -> Result<bool> {
    let response = match state.coupons.get_coupons().await {
        Ok(response) => response,
        Err(err) => return Ok(report(&err)),
    };

    if !response.success {
        println!(
            "{}",
            response.message.as_deref().unwrap_or("Failed to load coupons.")
        );
        return Ok(false);
    }

    if response.coupon.is_empty() {
        println!("No scratch cards available yet! Check back later for exciting rewards.");
        return Ok(false);
    }

    for (index, coupon) in response.coupon.iter().enumerate() {
        if coupon.is_scratched() {
            println!(
                "{}) ₹ {}  {}",
                index + 1,
                coupon.amount,
                coupon.coupon_code.as_deref().unwrap_or("-")
            );
        } else {
            println!("{}) [scratch to reveal]", index + 1);
        }
    }

    let choice = prompt("Card number to scratch (Enter to go back)")?;
    if choice.is_empty() {
        return Ok(false);
    }

    let Some(coupon) = choice
        .parse::<usize>()
        .ok()
        .and_then(|n| response.coupon.get(n.wrapping_sub(1)))
    else {
        println!("No such card.");
        return Ok(false);
    };

    if coupon.is_scratched() {
        println!("Already revealed: ₹ {}", coupon.amount);
        return Ok(false);
    }

    match state.coupons.reveal(coupon).await {
        Ok(RevealOutcome::Revealed { amount }) => {
            println!("Congratulations! You won ₹ {amount}!");
        }
        Ok(RevealOutcome::Failed { message }) => {
            println!("{}", message.as_deref().unwrap_or("Failed to reveal card."));
        }
        Ok(RevealOutcome::AlreadyInFlight) => {}
        Err(err) => return Ok(report(&err)),
    }

    Ok(false)
}

/// Repayment timeline
async fn timeline(state: &AppState) -> Result<bool> {
    let response = match state.clients.get_timeline().await {
        Ok(response) => response,
        Err(err) => return Ok(report(&err)),
    };

    if !response.success || response.timeline.is_empty() {
        println!("No timeline data found.");
        return Ok(false);
    }

    for entry in &response.timeline {
        let date = entry
            .created_at
            .map(|at| at.format("%d %b %Y").to_string())
            .unwrap_or_default();
        println!("\n{date}  {}", entry.title);
        if let Some(description) = &entry.description {
            println!("  {description}");
        }
    }

    Ok(false)
}

/// Payment screenshots: list, upload, delete
async fn screenshots(state: &AppState) -> Result<bool> {
    let response = match state.clients.get_screenshots().await {
        Ok(response) => response,
        Err(err) => return Ok(report(&err)),
    };

    if response.screenshots.is_empty() {
        println!("No screenshots uploaded yet.");
    }
    for (index, screenshot) in response.screenshots.iter().enumerate() {
        println!("{}) {}", index + 1, screenshot.url);
    }

    let choice = prompt("u <path> to upload, d <number> to delete (Enter to go back)")?;
    if let Some(path) = choice.strip_prefix("u ") {
        let bytes = match tokio::fs::read(path.trim()).await {
            Ok(bytes) => bytes,
            Err(err) => {
                println!("Could not read {path}: {err}");
                return Ok(false);
            }
        };

        match state.clients.upload_screenshot(bytes, "screenshot.jpg").await {
            Ok(result) if result.success => println!("Uploaded successfully!"),
            Ok(_) => println!("Upload failed. Try again."),
            Err(err) => return Ok(report(&err)),
        }
    } else if let Some(number) = choice.strip_prefix("d ") {
        let Some(screenshot) = number
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| response.screenshots.get(n.wrapping_sub(1)))
        else {
            println!("No such screenshot.");
            return Ok(false);
        };

        match state.clients.delete_screenshot(&screenshot.id).await {
            Ok(result) if result.success => println!("Screenshot deleted."),
            Ok(_) => println!("Delete failed. Try again."),
            Err(err) => return Ok(report(&err)),
        }
    }

    Ok(false)
}

/// Cached profile fields
async fn profile(state: &AppState) -> Result<bool> {
    let name = state
        .session
        .cached_name()
        .await
        .unwrap_or_else(|| "Guest User".to_string());
    let phone = state
        .session
        .cached_phone()
        .await
        .unwrap_or_else(|| "Not Available".to_string());

    println!("\n{name}\nMobile: {phone}");
    Ok(false)
}
