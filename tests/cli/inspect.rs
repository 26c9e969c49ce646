use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

#[test]
fn test_inspect_prints_metadata() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/components/ui/otp-field.tsx",
        r#"import * as React from "react";
import { cn } from "@/lib/utils";
import { Label } from "@/components/ui/label";

export const OtpField = React.forwardRef<HTMLInputElement>((props, ref) => <input ref={ref} className="border-[hsl(var(--input))]" {...props} />);
"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["inspect", "src/components/ui/otp-field.tsx"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    let metadata: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        metadata,
        json!({
            "description": "A form otp-field input component with custom styling",
            "exportedSymbols": ["OtpField"],
            "dependencies": { "external": [], "internal": ["label"] },
            "hasVariants": false,
            "hasSizes": false,
            "styleTokens": ["--input"]
        })
    );
    Ok(())
}

#[test]
fn test_inspect_missing_file_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["inspect", "src/components/ui/nope.tsx"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to read component file"));
    Ok(())
}
