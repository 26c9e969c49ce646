use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, run};

const ALERT: &str = r#"/** Displays a dismissible message. */
import * as React from "react";
import { cn } from "@/lib/utils";

export const Alert = React.forwardRef<HTMLDivElement, React.HTMLAttributes<HTMLDivElement>>(
  ({ className, ...props }, ref) => <div ref={ref} className={cn("rounded-md p-4", className)} {...props} />
);
Alert.displayName = "Alert";
"#;

const BUTTON: &str = r#"import * as React from "react";
import { Slot } from "@radix-ui/react-slot";
import { cva, type VariantProps } from "class-variance-authority";
import { cn } from "@/lib/utils";

const sizes = ["sm", "default", "lg"] as const;

export const buttonVariants = cva("focus-visible:ring-[hsl(var(--ring))]", {
  variants: {
    variant: { default: "bg-primary", outline: "border" },
    size: { sm: "h-8", default: "h-9", lg: "h-10" },
  },
  defaultVariants: { variant: "default", size: "default" },
});

export interface ButtonProps extends VariantProps<typeof buttonVariants> {}
export const Button = React.forwardRef<HTMLButtonElement, ButtonProps>(() => null);
"#;

const CONFIRM_DIALOG: &str = r#"import { Dialog, DialogContent } from "@/components/ui/dialog";
import { Button } from "@/components/ui/button";

export function ConfirmDialog() {
  return null;
}
"#;

fn component_names(index: &Value) -> Vec<String> {
    index["components"]
        .as_array()
        .map(|components| {
            components
                .iter()
                .filter_map(|c| c["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_build_alert_unit() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/ui/alert.tsx", ALERT)?;

    let output = run(test.build_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Generated 1/1 components (ui 1/1, custom 0/0)"));

    let unit = test.read_json("registry/components/alert.json")?;
    assert_eq!(unit["name"], "alert");
    assert_eq!(unit["type"], "components:ui");
    assert_eq!(unit["description"], "Displays a dismissible message.");
    assert_eq!(unit["version"], "0.1.0");
    assert_eq!(unit["meta"]["exports"], json!(["Alert"]));
    assert_eq!(unit["meta"]["source"], "components/ui/alert.tsx");
    assert_eq!(unit["files"][0]["name"], "alert.tsx");
    assert_eq!(unit["files"][0]["target"], "src/components/ui/alert.tsx");
    assert_eq!(unit["files"][0]["content"], ALERT);
    assert_eq!(unit["dependencies"], json!([]));
    assert_eq!(unit["devDependencies"], json!([]));
    assert_eq!(unit["registryDependencies"], json!([]));

    let raw = test.read_file("registry/components/alert.json")?;
    assert!(raw.starts_with("{\n  \"name\": \"alert\",\n  \"type\": \"components:ui\","));
    assert!(raw.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_build_index_and_dependencies() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/ui/button.tsx", BUTTON)?;
    test.write_file("src/components/ui/alert.tsx", ALERT)?;
    test.write_file("src/components/ui/button.stories.tsx", "export default {};")?;
    test.write_file("src/components/ui/index.ts", "export * from './button';")?;
    test.write_file("src/components/custom/confirm-dialog.tsx", CONFIRM_DIALOG)?;

    let output = run(test.build_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    let button = test.read_json("registry/components/button.json")?;
    assert_eq!(
        button["dependencies"],
        json!(["@radix-ui/react-slot", "class-variance-authority"])
    );
    assert_eq!(button["meta"]["hasVariants"], true);
    assert_eq!(button["meta"]["hasSizes"], true);
    assert_eq!(
        button["tailwind"]["config"]["theme"]["extend"],
        json!({ "--ring": "hsl(var(--ring))" })
    );

    let dialog = test.read_json("registry/components/confirm-dialog.json")?;
    assert_eq!(dialog["type"], "components:custom");
    assert_eq!(dialog["registryDependencies"], json!(["dialog", "button"]));
    assert_eq!(
        dialog["files"][0]["target"],
        "src/components/custom/confirm-dialog.tsx"
    );

    let index = test.read_json("registry/index.json")?;
    assert_eq!(index["name"], "@effectual/ui");
    assert_eq!(
        index["registryUrl"],
        "https://jack-effectual.github.io/effectual-ui"
    );
    assert_eq!(
        component_names(&index),
        vec!["alert", "button", "confirm-dialog"]
    );
    assert_eq!(
        index["stats"],
        json!({
            "totalComponents": 3,
            "uiComponents": 2,
            "customComponents": 1,
            "componentsWithVariants": 1,
            "componentsWithSizes": 1
        })
    );
    assert!(!test.root().join("registry/components/index.json").exists());
    assert!(!test.root().join("registry/components/button.stories.json").exists());
    Ok(())
}

#[test]
fn test_build_removes_obsolete_units() -> Result<()> {
    let test = CliTest::new()?;
    for name in ["a", "b", "c"] {
        test.write_file(
            &format!("src/components/ui/{}.tsx", name),
            "export const X = 1;\n",
        )?;
    }
    assert_eq!(run(test.build_command())?.code, Some(0));

    test.remove_file("src/components/ui/b.tsx")?;
    let mut cmd = test.build_command();
    cmd.arg("--verbose");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Removed obsolete component: b"));
    assert!(!test.root().join("registry/components/b.json").exists());
    assert!(test.root().join("registry/components/a.json").exists());

    let index = test.read_json("registry/index.json")?;
    assert_eq!(index["stats"]["totalComponents"], 2);
    assert_eq!(component_names(&index), vec!["a", "c"]);
    Ok(())
}

#[test]
fn test_build_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/ui/button.tsx", BUTTON)?;

    assert_eq!(run(test.build_command())?.code, Some(0));
    let mut first = test.read_json("registry/components/button.json")?;
    assert_eq!(run(test.build_command())?.code, Some(0));
    let mut second = test.read_json("registry/components/button.json")?;

    first["meta"]["generatedAt"] = Value::Null;
    second["meta"]["generatedAt"] = Value::Null;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_build_without_components_keeps_index() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("registry/index.json", "{\"components\": []}\n")?;

    let output = run(test.build_command())?;
    assert_eq!(output.code, Some(0));
    assert!(output.stderr.contains("No components found"));
    assert_eq!(
        test.read_file("registry/index.json")?,
        "{\"components\": []}\n"
    );
    Ok(())
}

#[test]
fn test_build_name_collision_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/ui/card.tsx", "export const Card = 1;\n")?;
    test.write_file(
        "src/components/custom/card.tsx",
        "export const CustomCard = 1;\n",
    )?;

    let output = run(test.build_command())?;
    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stderr
            .contains("name `card` is already used by a ui component")
    );
    assert!(output.stdout.contains("Generated 1/2 components (ui 1/1, custom 0/1)"));

    let unit = test.read_json("registry/components/card.json")?;
    assert_eq!(unit["type"], "components:ui");
    Ok(())
}

#[test]
fn test_build_dry_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/components/ui/alert.tsx", ALERT)?;
    test.write_file("registry/components/legacy.json", "{}\n")?;

    let mut cmd = test.build_command();
    cmd.arg("--dry-run");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Would remove 1 obsolete unit: legacy"));
    assert!(output.stdout.contains("Would generate 1/1 components"));
    assert!(test.root().join("registry/components/legacy.json").exists());
    assert!(!test.root().join("registry/components/alert.json").exists());
    assert!(!test.root().join("registry/index.json").exists());
    Ok(())
}

#[test]
fn test_build_with_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".regkitrc.json",
        r#"{
            "sourceRoot": "lib",
            "registryRoot": "public/r",
            "version": "2.1.0",
            "peerDependencies": ["react", "react-dom", "next"]
        }"#,
    )?;
    test.write_file(
        "lib/components/ui/nav.tsx",
        "import Link from \"next/link\";\nimport { motion } from \"framer-motion\";\nexport function Nav() {}\n",
    )?;

    let output = run(test.build_command())?;
    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);

    let unit = test.read_json("public/r/components/nav.json")?;
    assert_eq!(unit["version"], "2.1.0");
    assert_eq!(unit["dependencies"], json!(["framer-motion"]));
    assert_eq!(unit["meta"]["source"], "components/ui/nav.tsx");
    assert_eq!(unit["files"][0]["target"], "src/components/ui/nav.tsx");
    assert_eq!(test.read_json("public/r/index.json")?["version"], "2.1.0");
    Ok(())
}

#[test]
fn test_build_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".regkitrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.build_command())?;
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Invalid glob pattern in 'ignores'"));
    Ok(())
}

#[test]
fn test_build_root_overrides_relative_to_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/lib/components/ui/alert.tsx", ALERT)?;

    let mut cmd = test.build_command();
    cmd.args(["--path", "web", "--source-root", "lib", "--registry-root", "out"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(output.stdout.contains("Generated 1/1 components"));
    assert_eq!(test.read_json("web/out/components/alert.json")?["name"], "alert");
    assert!(test.root().join("web/out/index.json").exists());
    assert!(!test.root().join("web/web").exists());
    Ok(())
}
