pub fn render_welcome(name: &str, email: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Welcome to the Feedback Portal</h2>
    <p>Hi {name},</p>
    <p>Thank you for registering. Your account is registered for <strong>{email}</strong>.</p>
    <p style="color: #666; font-size: 14px;">If you didn't expect this email, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_verify_otp(email: &str, otp: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Verify your account</h2>
    <p>Your verification code for <strong>{email}</strong> is:</p>
    <p style="font-size: 28px; letter-spacing: 6px; font-weight: bold;">{otp}</p>
    <p style="color: #666; font-size: 14px;">This code expires in 5 minutes.</p>
</body>
</html>"#
    )
}

pub fn render_reset_otp(email: &str, otp: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Password reset</h2>
    <p>A password reset was requested for <strong>{email}</strong>. Your code is:</p>
    <p style="font-size: 28px; letter-spacing: 6px; font-weight: bold;">{otp}</p>
    <p style="color: #666; font-size: 14px;">This code expires in 5 minutes. If you didn't request this, you can ignore it.</p>
</body>
</html>"#
    )
}
